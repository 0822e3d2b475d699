// Engine module - report logic over loaded records
// This layer sits between the loaders (providers) and CLI presentation

pub mod analysis;
pub mod error;
pub mod export;
pub mod extract;
pub mod histogram;
pub mod projection;
pub mod select;
pub mod summary;

pub use analysis::{
    AnalysisOptions, DEFAULT_ERROR_PREVIEW_CHARS, DEFAULT_THOUGHT_PREVIEW_CHARS, DeepAnalysis,
    Excerpt, RunOutcome, SessionInfo, TokenUsage, analyze,
};
pub use error::{Error, Result};
pub use export::{export_changes, export_file_name, render_export, sanitize_path};
pub use extract::{
    DEFAULT_PAYLOAD_PREVIEW_CHARS, FileChangeStats, PayloadPreview, extract_code_changes,
    group_by_file, preview_payload,
};
pub use histogram::{Count, Histogram};
pub use projection::{ProjectedRecord, parse_key_list, project};
pub use select::{Numbered, filter_by_type, record_at};
pub use summary::{LogSummary, summarize};
