use crate::histogram::{Count, Histogram};
use jv_types::{JsonPath, display_value};
use serde::Serialize;
use serde_json::Value;

/// Bucket for records without a usable `type`
pub const UNKNOWN_TYPE: &str = "unknown";

#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
    pub total: usize,
    /// `type` histogram, most frequent first
    pub types: Vec<Count>,
    /// A `system`/`init` record was seen, so the deep analysis applies
    pub has_init_record: bool,
}

/// Histogram key for a record's `type` field.
///
/// Missing or `null` types fall into [`UNKNOWN_TYPE`]; non-string values are
/// keyed by their compact JSON text.
pub fn type_key(record: &Value) -> String {
    match record.lookup("type") {
        None | Some(Value::Null) => UNKNOWN_TYPE.to_string(),
        Some(value) => display_value(value),
    }
}

/// True when any record is a Claude Code `system`/`init` record. Not a schema check.
pub fn has_init_record(records: &[Value]) -> bool {
    records
        .iter()
        .any(|r| r.has_str("type", "system") && r.has_str("subtype", "init"))
}

pub fn summarize(records: &[Value]) -> LogSummary {
    let mut types = Histogram::new();
    for record in records {
        types.add(&type_key(record));
    }

    LogSummary {
        total: records.len(),
        types: types.sorted(),
        has_init_record: has_init_record(records),
    }
}
