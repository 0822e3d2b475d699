use crate::util::display_value;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Marker line opening the old half of an edit payload
pub const EDIT_OLD_MARKER: &str = "--- OLD ---";
/// Marker line opening the new half of an edit payload
pub const EDIT_NEW_MARKER: &str = "+++ NEW +++";

/// Path used when a tool invocation carries no `file_path`
pub const UNKNOWN_PATH: &str = "unknown";

/// File-mutating tool recognized by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolKind {
    /// Writes a whole file (`Write`)
    Write,
    /// Replaces a string inside a file (`Edit`)
    Edit,
}

impl ToolKind {
    /// Match an agent tool name exactly (`Write` / `Edit`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Write" => Some(ToolKind::Write),
            "Edit" => Some(ToolKind::Edit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Write => "Write",
            ToolKind::Edit => "Edit",
        }
    }

    /// Lowercase label used in exported file names
    pub fn file_label(&self) -> &'static str {
        match self {
            ToolKind::Write => "write",
            ToolKind::Edit => "edit",
        }
    }

    pub fn change_kind(&self) -> ChangeKind {
        match self {
            ToolKind::Write => ChangeKind::Create,
            ToolKind::Edit => ChangeKind::Modify,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Create,
    Modify,
}

/// Where a change was found.
///
/// Usually the 1-based index of the record in the loaded sequence; trajectory
/// steps may instead report their own `step_id`, whatever JSON value it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourcePosition {
    Record(usize),
    Step(Value),
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePosition::Record(index) => write!(f, "{}", index),
            SourcePosition::Step(value) => f.write_str(&display_value(value)),
        }
    }
}

/// A file write or edit performed by the agent, as recovered from the log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeChange {
    pub source: SourcePosition,
    pub tool: ToolKind,
    pub kind: ChangeKind,
    pub file_path: String,
    pub payload: String,
}

impl CodeChange {
    /// Full-file write; the payload is the new file content.
    pub fn write(source: SourcePosition, file_path: &str, content: &str) -> Self {
        Self {
            source,
            tool: ToolKind::Write,
            kind: ChangeKind::Create,
            file_path: file_path.to_string(),
            payload: content.to_string(),
        }
    }

    /// String replacement; the payload embeds both halves under fixed markers.
    pub fn edit(source: SourcePosition, file_path: &str, old: &str, new: &str) -> Self {
        Self {
            source,
            tool: ToolKind::Edit,
            kind: ChangeKind::Modify,
            file_path: file_path.to_string(),
            payload: format!("{EDIT_OLD_MARKER}\n{old}\n\n{EDIT_NEW_MARKER}\n{new}"),
        }
    }

    /// Payload length in characters
    pub fn payload_chars(&self) -> usize {
        self.payload.chars().count()
    }
}
