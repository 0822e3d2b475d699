// Error types
pub mod error;

// Loaders
pub mod jsonl;
pub mod trajectory;

// Format detection
pub mod detect;

pub use detect::{LoadedLog, load_log, parse_log};
pub use jsonl::{JsonlRecords, SkippedLine, load_jsonl, parse_jsonl};
pub use trajectory::{load_trajectory, parse_trajectory, records_from_document};

// Error types
pub use error::{Error, Result};
