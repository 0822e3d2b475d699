use crate::jsonl::{SkippedLine, parse_jsonl};
use crate::trajectory::take_steps;
use crate::{Error, Result};
use jv_types::LogFormat;
use serde_json::Value;
use std::path::Path;

/// Records of one input file together with the format they were read as.
#[derive(Debug, Clone)]
pub struct LoadedLog {
    pub format: LogFormat,
    pub records: Vec<Value>,
    /// Malformed lines dropped by the JSONL loader (always empty for trajectories)
    pub skipped: Vec<SkippedLine>,
}

impl LoadedLog {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Decide the format of `text` and decode it.
///
/// A document that parses as an object carrying a `steps` array is a
/// trajectory. Anything else, including a document that fails to parse at
/// all, is read line by line; the whole-document failure is not reported.
pub fn parse_log(text: &str) -> LoadedLog {
    match serde_json::from_str::<Value>(text) {
        Ok(mut doc) => {
            if let Some(steps) = take_steps(&mut doc) {
                tracing::debug!("detected trajectory document with {} steps", steps.len());
                return LoadedLog {
                    format: LogFormat::Trajectory,
                    records: steps,
                    skipped: Vec::new(),
                };
            }
            tracing::debug!("single JSON document without steps, reading as JSONL");
        }
        Err(err) => {
            tracing::debug!("not a single JSON document ({}), reading as JSONL", err);
        }
    }

    let parsed = parse_jsonl(text);
    LoadedLog {
        format: LogFormat::Jsonl,
        records: parsed.records,
        skipped: parsed.skipped,
    }
}

/// Load `path`, auto-detecting JSONL vs trajectory.
///
/// Fails only when the file is missing or unreadable as UTF-8 text.
pub fn load_log(path: &Path) -> Result<LoadedLog> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(parse_log(&text))
}
