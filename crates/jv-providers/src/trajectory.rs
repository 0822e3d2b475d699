use crate::Result;
use serde_json::Value;
use std::path::Path;

/// Pull the `steps` array out of a trajectory document.
///
/// Returns `None` unless `doc` is an object whose `steps` is an array.
pub fn take_steps(doc: &mut Value) -> Option<Vec<Value>> {
    match doc.as_object_mut()?.get_mut("steps")? {
        Value::Array(steps) => Some(std::mem::take(steps)),
        _ => None,
    }
}

/// Turn a whole JSON document into records.
///
/// - `{"steps": [...]}` yields the steps in order
/// - a bare array yields its elements
/// - any other value becomes a single record
pub fn records_from_document(mut doc: Value) -> Vec<Value> {
    if let Some(steps) = take_steps(&mut doc) {
        return steps;
    }
    match doc {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Parse a trajectory document from text. Unlike the format detector this
/// reports decode errors instead of falling back.
pub fn parse_trajectory(text: &str) -> Result<Vec<Value>> {
    let doc: Value = serde_json::from_str(text)?;
    Ok(records_from_document(doc))
}

/// Load a trajectory.json style file
pub fn load_trajectory(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)?;
    parse_trajectory(&text)
}
