use jv_types::JsonPath;
use serde_json::Value;

/// A record together with its 1-based position in the loaded sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numbered<'a> {
    pub position: usize,
    pub record: &'a Value,
}

/// Record at 1-based `line`, or `None` when out of range (including 0).
pub fn record_at(records: &[Value], line: usize) -> Option<&Value> {
    line.checked_sub(1).and_then(|idx| records.get(idx))
}

/// Every record whose `type` equals `wanted`, in order.
pub fn filter_by_type<'a>(records: &'a [Value], wanted: &str) -> Vec<Numbered<'a>> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.has_str("type", wanted))
        .map(|(idx, record)| Numbered {
            position: idx + 1,
            record,
        })
        .collect()
}
