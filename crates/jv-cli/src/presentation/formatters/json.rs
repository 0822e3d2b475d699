use jv_types::char_prefix;
use serde_json::Value;

/// Line appended when a pretty-printed record is cut short
pub const TRUNCATION_NOTICE: &str = "... (truncated)";

/// Two-space indented JSON with source key order and raw non-ASCII text.
pub fn pretty(value: &Value) -> String {
    // Serializing a Value cannot fail: keys are always strings
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn compact(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// `pretty(value)` cut to `limit` characters followed by [`TRUNCATION_NOTICE`].
///
/// A limit of 0 disables truncation.
pub fn pretty_truncated(value: &Value, limit: Option<usize>) -> String {
    let text = pretty(value);
    match limit {
        Some(limit) if limit > 0 && text.chars().count() > limit => {
            format!("{}\n{}", char_prefix(&text, limit), TRUNCATION_NOTICE)
        }
        _ => text,
    }
}
