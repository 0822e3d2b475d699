//! Builders for the record shapes jv understands.

use serde_json::{Value, json};

pub fn init_record(model: &str, tools: &[&str]) -> Value {
    json!({
        "type": "system",
        "subtype": "init",
        "model": model,
        "claude_code_version": "2.0.0",
        "cwd": "/tmp/project",
        "tools": tools,
    })
}

pub fn assistant_text(text: &str) -> Value {
    json!({
        "type": "assistant",
        "message": {"role": "assistant", "content": [{"type": "text", "text": text}]}
    })
}

pub fn assistant_tool_use(name: &str, input: Value) -> Value {
    json!({
        "type": "assistant",
        "message": {"role": "assistant", "content": [
            {"type": "tool_use", "id": "toolu_test", "name": name, "input": input}
        ]}
    })
}

pub fn assistant_write(file_path: &str, content: &str) -> Value {
    assistant_tool_use("Write", json!({"file_path": file_path, "content": content}))
}

pub fn assistant_edit(file_path: &str, old: &str, new: &str) -> Value {
    assistant_tool_use(
        "Edit",
        json!({"file_path": file_path, "old_string": old, "new_string": new}),
    )
}

pub fn user_tool_result(content: &str, is_error: bool) -> Value {
    json!({
        "type": "user",
        "message": {"role": "user", "content": [
            {"type": "tool_result", "tool_use_id": "toolu_test", "is_error": is_error, "content": content}
        ]}
    })
}

pub fn result_record(
    duration_ms: u64,
    cost_usd: f64,
    input_tokens: u64,
    output_tokens: u64,
) -> Value {
    json!({
        "type": "result",
        "subtype": "success",
        "duration_ms": duration_ms,
        "num_turns": 1,
        "total_cost_usd": cost_usd,
        "usage": {"input_tokens": input_tokens, "output_tokens": output_tokens}
    })
}

/// One trajectory step with flat `tool_calls`
pub fn trajectory_step(step_id: u64, tool_calls: Value) -> Value {
    json!({"step_id": step_id, "source": "agent", "tool_calls": tool_calls})
}

/// Serialize records as JSONL text (trailing newline included)
pub fn to_jsonl(records: &[Value]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n", r))
        .collect()
}
