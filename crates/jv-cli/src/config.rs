use anyhow::{Context, Result};
use jv_engine::{
    AnalysisOptions, DEFAULT_ERROR_PREVIEW_CHARS, DEFAULT_PAYLOAD_PREVIEW_CHARS,
    DEFAULT_THOUGHT_PREVIEW_CHARS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "JV_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. JV_CONFIG environment variable
/// 3. `<config dir>/jv/config.toml` (XDG on Linux)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("jv").join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default for `--truncate`; unset means records print in full
    pub truncate: Option<usize>,
    pub code_preview_chars: usize,
    pub error_preview_chars: usize,
    pub thought_preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            truncate: None,
            code_preview_chars: DEFAULT_PAYLOAD_PREVIEW_CHARS,
            error_preview_chars: DEFAULT_ERROR_PREVIEW_CHARS,
            thought_preview_chars: DEFAULT_THOUGHT_PREVIEW_CHARS,
        }
    }
}

impl DisplayConfig {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            error_preview_chars: self.error_preview_chars,
            thought_preview_chars: self.thought_preview_chars,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load the config at the resolved path; a missing file yields defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.code_preview_chars, 3000);
        assert_eq!(config.display.error_preview_chars, 80);
        assert_eq!(config.display.thought_preview_chars, 60);
        assert_eq!(config.display.truncate, None);
    }

    #[test]
    fn test_partial_display_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ntruncate = 500\nthought_preview_chars = 20\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display.truncate, Some(500));
        assert_eq!(config.display.thought_preview_chars, 20);
        assert_eq!(config.display.error_preview_chars, 80);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display\ntruncate = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(resolve_config_path(Some(&explicit)), Some(explicit));
    }

    #[test]
    fn test_analysis_options_follow_display() {
        let display = DisplayConfig {
            error_preview_chars: 10,
            thought_preview_chars: 5,
            ..Default::default()
        };
        let options = display.analysis_options();
        assert_eq!(options.error_preview_chars, 10);
        assert_eq!(options.thought_preview_chars, 5);
    }
}
