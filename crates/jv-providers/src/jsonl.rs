use crate::Result;
use serde_json::Value;
use std::path::Path;

/// A line that could not be decoded and was left out of the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based physical line number in the source file (blank lines count)
    pub line: usize,
    pub message: String,
}

/// Records decoded from a line-delimited file plus the lines that failed.
#[derive(Debug, Clone, Default)]
pub struct JsonlRecords {
    pub records: Vec<Value>,
    pub skipped: Vec<SkippedLine>,
}

/// Decode one JSON value per non-blank line.
///
/// Malformed lines are reported once each (tracing `warn`) and skipped;
/// they never abort the load.
pub fn parse_jsonl(text: &str) -> JsonlRecords {
    let mut out = JsonlRecords::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(record) => out.records.push(record),
            Err(err) => {
                tracing::warn!("line {}: JSON parse failed: {}", line_no, err);
                out.skipped.push(SkippedLine {
                    line: line_no,
                    message: err.to_string(),
                });
            }
        }
    }

    out
}

/// Read a file as UTF-8 and decode it as JSONL
pub fn load_jsonl(path: &Path) -> Result<JsonlRecords> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_jsonl(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_lines_are_skipped_silently() {
        let parsed = parse_jsonl("{\"a\":1}\n\n   \n{\"a\":2}\n");
        assert_eq!(parsed.records, vec![json!({"a": 1}), json!({"a": 2})]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_malformed_lines_keep_physical_numbers() {
        let parsed = parse_jsonl("{\"a\":1}\n\nnot json\n{\"a\":2}\n{broken\n");
        assert_eq!(parsed.records.len(), 2);
        let lines: Vec<usize> = parsed.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 5]);
    }

    #[test]
    fn test_crlf_and_surrounding_whitespace() {
        let parsed = parse_jsonl("  {\"type\":\"user\"}  \r\n{\"type\":\"assistant\"}\r\n");
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1]["type"], "assistant");
    }

    #[test]
    fn test_non_object_values_are_records() {
        let parsed = parse_jsonl("1\n\"text\"\n[1,2]\nnull\n");
        assert_eq!(parsed.records.len(), 4);
    }
}
