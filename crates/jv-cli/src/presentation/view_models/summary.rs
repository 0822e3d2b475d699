use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryViewModel {
    pub file_path: String,
    pub format: String,
    pub total_records: usize,
    pub skipped_lines: Vec<SkippedLineViewModel>,
    pub types: Vec<TypeCountViewModel>,
    pub claude_code_log: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedLineViewModel {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeCountViewModel {
    #[serde(rename = "type")]
    pub type_name: String,
    pub count: usize,
}
