use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the input file, decided once at load time.
///
/// The format only changes which key paths the code extractor looks at;
/// every other report treats records the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON value per non-blank line
    Jsonl,
    /// A single JSON document whose `steps` array holds the records
    Trajectory,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Jsonl => "jsonl",
            LogFormat::Trajectory => "trajectory",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
