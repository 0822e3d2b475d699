use serde::Serialize;
use serde_json::{Map, Value};

/// One record, pretty-printed in text mode.
#[derive(Debug, Clone, Serialize)]
pub struct RecordViewModel {
    pub position: usize,
    pub record: Value,
    /// Text-only character limit
    #[serde(skip)]
    pub truncate: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordListViewModel {
    #[serde(rename = "type")]
    pub type_filter: String,
    pub records: Vec<RecordViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionViewModel {
    pub keys: Vec<String>,
    pub rows: Vec<ProjectedRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectedRowViewModel {
    pub position: usize,
    pub fields: Map<String, Value>,
}
