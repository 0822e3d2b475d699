//! Recover the files an agent wrote or edited from its log.
//!
//! Three log shapes carry file writes, and each is handled by its own rule:
//!
//! 1. Claude Code stream-json: `tool_use` entries inside an assistant
//!    record's `message.content` (`Write` and `Edit`)
//! 2. flat `tool_calls` on any record (`Write` only)
//! 3. trajectory steps, whose `tool_calls` are read again with the step's
//!    own `step_id` as position (`Write` and `Edit`)
//!
//! Rules run in that order on every record and never see each other's
//! output, so a trajectory `Write` shows up twice (once from rule 2, once
//! from rule 3).

use jv_types::{
    CodeChange, JsonPath, LogFormat, SourcePosition, ToolKind, UNKNOWN_PATH, char_prefix,
};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Payloads longer than this are cut in the console report
pub const DEFAULT_PAYLOAD_PREVIEW_CHARS: usize = 3000;

static NULL: Value = Value::Null;

/// Per-invocation scan state shared by the rules
#[derive(Debug, Clone, Copy)]
pub struct ScanContext {
    pub format: LogFormat,
}

/// One extraction rule: `(context, 1-based position, record) -> changes`
pub type ExtractionRule = fn(&ScanContext, usize, &Value) -> Vec<CodeChange>;

/// Rules in emission order
pub const RULES: &[ExtractionRule] = &[
    content_tool_uses,
    top_level_tool_calls,
    trajectory_tool_calls,
];

/// Build a change from a tool's argument object.
fn change_from_args(tool: ToolKind, source: SourcePosition, args: &Value) -> CodeChange {
    let path = args.str_at("file_path").unwrap_or(UNKNOWN_PATH);
    match tool {
        ToolKind::Write => CodeChange::write(source, path, args.str_at("content").unwrap_or("")),
        ToolKind::Edit => CodeChange::edit(
            source,
            path,
            args.str_at("old_string").unwrap_or(""),
            args.str_at("new_string").unwrap_or(""),
        ),
    }
}

/// `arguments` of a flat tool call; JSON-encoded strings are decoded.
fn call_arguments(call: &Value) -> Cow<'_, Value> {
    match call.lookup("arguments") {
        Some(Value::String(raw)) => {
            Cow::Owned(serde_json::from_str::<Value>(raw).unwrap_or(Value::Null))
        }
        Some(args) => Cow::Borrowed(args),
        None => Cow::Owned(Value::Null),
    }
}

/// Rule 1: `tool_use` entries in an assistant message.
pub fn content_tool_uses(_ctx: &ScanContext, position: usize, record: &Value) -> Vec<CodeChange> {
    if !record.has_str("type", "assistant") {
        return Vec::new();
    }

    record
        .array_at("message.content")
        .iter()
        .filter(|entry| entry.has_str("type", "tool_use"))
        .filter_map(|entry| {
            let tool = ToolKind::from_name(entry.str_at("name")?)?;
            let input = entry.lookup("input").unwrap_or(&NULL);
            Some(change_from_args(tool, SourcePosition::Record(position), input))
        })
        .collect()
}

/// Rule 2: top-level `tool_calls`, whatever the record type. Writes only.
pub fn top_level_tool_calls(
    _ctx: &ScanContext,
    position: usize,
    record: &Value,
) -> Vec<CodeChange> {
    record
        .array_at("tool_calls")
        .iter()
        .filter(|call| call.has_str("function_name", ToolKind::Write.name()))
        .map(|call| {
            change_from_args(
                ToolKind::Write,
                SourcePosition::Record(position),
                &call_arguments(call),
            )
        })
        .collect()
}

/// Rule 3: trajectory step `tool_calls`, positioned by `step_id`.
pub fn trajectory_tool_calls(
    ctx: &ScanContext,
    position: usize,
    record: &Value,
) -> Vec<CodeChange> {
    if ctx.format != LogFormat::Trajectory {
        return Vec::new();
    }

    let source = match record.lookup("step_id") {
        None | Some(Value::Null) => SourcePosition::Record(position),
        Some(step_id) => SourcePosition::Step(step_id.clone()),
    };

    record
        .array_at("tool_calls")
        .iter()
        .filter_map(|call| {
            let tool = ToolKind::from_name(call.str_at("function_name")?)?;
            Some(change_from_args(tool, source.clone(), &call_arguments(call)))
        })
        .collect()
}

/// Scan all records with every rule, preserving discovery order.
pub fn extract_code_changes(records: &[Value], format: LogFormat) -> Vec<CodeChange> {
    let ctx = ScanContext { format };
    let mut changes = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        for rule in RULES {
            changes.extend(rule(&ctx, idx + 1, record));
        }
    }

    tracing::debug!("extracted {} code changes from {} records", changes.len(), records.len());
    changes
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChangeStats {
    pub file_path: String,
    pub writes: usize,
    pub edits: usize,
}

/// Per-file write/edit counts, files in first-seen order.
pub fn group_by_file(changes: &[CodeChange]) -> Vec<FileChangeStats> {
    let mut stats: Vec<FileChangeStats> = Vec::new();

    for change in changes {
        let pos = match stats.iter().position(|s| s.file_path == change.file_path) {
            Some(pos) => pos,
            None => {
                stats.push(FileChangeStats {
                    file_path: change.file_path.clone(),
                    writes: 0,
                    edits: 0,
                });
                stats.len() - 1
            }
        };
        match change.tool {
            ToolKind::Write => stats[pos].writes += 1,
            ToolKind::Edit => stats[pos].edits += 1,
        }
    }

    stats
}

/// Console view of a payload: at most `limit` characters of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadPreview<'a> {
    pub text: &'a str,
    pub total_chars: usize,
    pub truncated: bool,
}

pub fn preview_payload(payload: &str, limit: usize) -> PayloadPreview<'_> {
    let total_chars = payload.chars().count();
    if total_chars > limit {
        PayloadPreview {
            text: char_prefix(payload, limit),
            total_chars,
            truncated: true,
        }
    } else {
        PayloadPreview {
            text: payload,
            total_chars,
            truncated: false,
        }
    }
}
