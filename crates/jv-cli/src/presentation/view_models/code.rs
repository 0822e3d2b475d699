use jv_types::SourcePosition;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CodeReportViewModel {
    pub total: usize,
    pub files: Vec<FileStatsViewModel>,
    pub changes: Vec<CodeChangeViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportViewModel>,
    /// Text-only payload limit; JSON always carries full payloads
    #[serde(skip)]
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileStatsViewModel {
    pub file_path: String,
    pub writes: usize,
    pub edits: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeChangeViewModel {
    pub index: usize,
    /// Record position, or the trajectory step's own `step_id`
    pub source: SourcePosition,
    pub tool: String,
    pub kind: String,
    pub file_path: String,
    pub payload: String,
    pub payload_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportViewModel {
    pub output_dir: String,
    pub files: Vec<String>,
}
