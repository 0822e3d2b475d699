//! Deep analysis of Claude Code stream-json logs.
//!
//! Four independent passes over the same records:
//! session metadata (first `system`/`init`), run outcome (first `result`),
//! tool usage with tool errors, and the assistant's narrated reasoning.

use crate::histogram::{Count, Histogram};
use jv_types::{JsonPath, char_prefix, content_text, display_value};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_ERROR_PREVIEW_CHARS: usize = 80;
pub const DEFAULT_THOUGHT_PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub error_preview_chars: usize,
    pub thought_preview_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            error_preview_chars: DEFAULT_ERROR_PREVIEW_CHARS,
            thought_preview_chars: DEFAULT_THOUGHT_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionInfo {
    pub model: Option<String>,
    pub version: Option<String>,
    pub cwd: Option<String>,
    pub tool_count: usize,
}

/// Token counters exactly as the result record stores them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenUsage {
    pub input_tokens: Value,
    pub output_tokens: Value,
    pub cache_read_input_tokens: Value,
    pub cache_creation_input_tokens: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub success: bool,
    pub duration_secs: f64,
    pub num_turns: Option<String>,
    pub total_cost_usd: f64,
    pub usage: TokenUsage,
}

/// A preview of text found at a record position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepAnalysis {
    pub session: Option<SessionInfo>,
    pub outcome: Option<RunOutcome>,
    pub tools: Vec<Count>,
    pub errors: Vec<Excerpt>,
    pub thoughts: Vec<Excerpt>,
}

fn optional_text(record: &Value, path: &str) -> Option<String> {
    match record.lookup(path) {
        None | Some(Value::Null) => None,
        Some(value) => Some(display_value(value)),
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

pub fn session_info(records: &[Value]) -> Option<SessionInfo> {
    let init = records
        .iter()
        .find(|r| r.has_str("type", "system") && r.has_str("subtype", "init"))?;

    Some(SessionInfo {
        model: optional_text(init, "model"),
        version: optional_text(init, "claude_code_version"),
        cwd: optional_text(init, "cwd"),
        tool_count: init.array_at("tools").len(),
    })
}

pub fn run_outcome(records: &[Value]) -> Option<RunOutcome> {
    let result = records.iter().find(|r| r.has_str("type", "result"))?;

    Some(RunOutcome {
        success: result.has_str("subtype", "success"),
        duration_secs: result.f64_or_zero("duration_ms") / 1000.0,
        num_turns: optional_text(result, "num_turns"),
        total_cost_usd: result.f64_or_zero("total_cost_usd"),
        usage: TokenUsage {
            input_tokens: result.value_or_zero("usage.input_tokens"),
            output_tokens: result.value_or_zero("usage.output_tokens"),
            cache_read_input_tokens: result.value_or_zero("usage.cache_read_input_tokens"),
            cache_creation_input_tokens: result.value_or_zero("usage.cache_creation_input_tokens"),
        },
    })
}

/// Count `tool_use` entries by name across assistant records.
pub fn tool_usage(records: &[Value]) -> Vec<Count> {
    let mut tools = Histogram::new();
    for record in records.iter().filter(|r| r.has_str("type", "assistant")) {
        for entry in record.array_at("message.content") {
            if entry.has_str("type", "tool_use") {
                tools.add(entry.str_at("name").unwrap_or("unknown"));
            }
        }
    }
    tools.sorted()
}

/// Tool results flagged `is_error` inside user records.
pub fn tool_errors(records: &[Value], preview_chars: usize) -> Vec<Excerpt> {
    let mut errors = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if !record.has_str("type", "user") {
            continue;
        }
        for entry in record.array_at("message.content") {
            if is_truthy(entry.lookup("is_error")) {
                let text = entry.lookup("content").map(content_text).unwrap_or_default();
                errors.push(Excerpt {
                    position: idx + 1,
                    text: char_prefix(&text, preview_chars).to_string(),
                });
            }
        }
    }
    errors
}

/// First `text` segment of each assistant record.
pub fn reasoning(records: &[Value], preview_chars: usize) -> Vec<Excerpt> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.has_str("type", "assistant"))
        .filter_map(|(idx, record)| {
            let entry = record
                .array_at("message.content")
                .iter()
                .find(|c| c.has_str("type", "text"))?;
            let text = entry.str_at("text").unwrap_or_default();
            Some(Excerpt {
                position: idx + 1,
                text: char_prefix(text, preview_chars).to_string(),
            })
        })
        .collect()
}

pub fn analyze(records: &[Value], options: &AnalysisOptions) -> DeepAnalysis {
    DeepAnalysis {
        session: session_info(records),
        outcome: run_outcome(records),
        tools: tool_usage(records),
        errors: tool_errors(records, options.error_preview_chars),
        thoughts: reasoning(records, options.thought_preview_chars),
    }
}
