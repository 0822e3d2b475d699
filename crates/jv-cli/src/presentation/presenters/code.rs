use std::path::Path;

use crate::presentation::view_models::{
    CodeChangeViewModel, CodeReportViewModel, CommandResultViewModel, ExportViewModel,
    FileStatsViewModel, StatusBadge,
};
use jv_engine::group_by_file;
use jv_types::{ChangeKind, CodeChange};

fn kind_label(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Create => "create",
        ChangeKind::Modify => "modify",
    }
}

/// `exported` holds the export directory and the file names written into it.
pub fn present_code_report(
    changes: &[CodeChange],
    exported: Option<(&Path, Vec<String>)>,
    preview_chars: usize,
) -> CommandResultViewModel<CodeReportViewModel> {
    let files = group_by_file(changes)
        .into_iter()
        .map(|s| FileStatsViewModel {
            file_path: s.file_path,
            writes: s.writes,
            edits: s.edits,
        })
        .collect();

    let change_vms = changes
        .iter()
        .enumerate()
        .map(|(idx, change)| CodeChangeViewModel {
            index: idx + 1,
            source: change.source.clone(),
            tool: change.tool.to_string(),
            kind: kind_label(change.kind).to_string(),
            file_path: change.file_path.clone(),
            payload: change.payload.clone(),
            payload_chars: change.payload_chars(),
        })
        .collect();

    let content = CodeReportViewModel {
        total: changes.len(),
        files,
        changes: change_vms,
        export: exported.map(|(dir, files)| ExportViewModel {
            output_dir: dir.display().to_string(),
            files,
        }),
        preview_chars,
    };

    let badge = if changes.is_empty() {
        StatusBadge::warning("no code changes found")
    } else {
        StatusBadge::info("Agent code changes")
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
