//! Sample log files used across test suites.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Claude Code stream-json log with one malformed line and one blank line
pub const CLAUDE_STREAM: &str = "claude_stream.jsonl";
/// Trajectory document with four steps
pub const TRAJECTORY: &str = "trajectory.json";

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/jv-providers/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .map(|crates| crates.join("jv-providers/tests/samples"))
            .unwrap_or_else(|| manifest_dir.join("samples"));

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        fs::copy(self.path(sample_name), dest)
            .with_context(|| format!("Failed to copy sample {}", sample_name))?;
        Ok(())
    }
}
