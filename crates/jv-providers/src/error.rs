use std::fmt;
use std::path::PathBuf;

/// Result type for jv-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a log file
#[derive(Debug)]
pub enum Error {
    /// Input path does not exist
    NotFound(PathBuf),

    /// IO operation failed (including invalid UTF-8 content)
    Io(std::io::Error),

    /// JSON parsing failed for a whole-document load
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
