use crate::{Error, Result};
use jv_types::{CodeChange, ToolKind};
use std::path::{Path, PathBuf};

/// Flatten a target path into a single file name component.
pub fn sanitize_path(path: &str) -> String {
    path.replace(['/', '\\'], "_")
        .trim_start_matches('_')
        .to_string()
}

/// `{index:03}_{write|edit}_{sanitized path}`, with `.diff` for edits.
/// `index` is the 1-based discovery index of the change.
pub fn export_file_name(index: usize, change: &CodeChange) -> String {
    let base = format!(
        "{:03}_{}_{}",
        index,
        change.tool.file_label(),
        sanitize_path(&change.file_path)
    );
    match change.tool {
        ToolKind::Edit => format!("{base}.diff"),
        ToolKind::Write => base,
    }
}

/// File body: two provenance lines, a blank line, then the full payload.
pub fn render_export(change: &CodeChange) -> String {
    format!(
        "# Source: line {}, tool: {}\n# Target: {}\n\n{}",
        change.source, change.tool, change.file_path, change.payload
    )
}

/// Write every change into `dir` (created with parents when missing).
///
/// Returns the written file names in discovery order. The first failure
/// aborts the export.
pub fn export_changes(changes: &[CodeChange], dir: &Path) -> Result<Vec<String>> {
    std::fs::create_dir_all(dir).map_err(|source| Error::Export {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(changes.len());
    for (idx, change) in changes.iter().enumerate() {
        let name = export_file_name(idx + 1, change);
        let path: PathBuf = dir.join(&name);
        std::fs::write(&path, render_export(change))
            .map_err(|source| Error::Export { path: path.clone(), source })?;
        tracing::debug!("exported {}", path.display());
        written.push(name);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jv_types::SourcePosition;
    use serde_json::json;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/work/demo/calc.py"), "work_demo_calc.py");
        assert_eq!(sanitize_path("C:\\src\\main.rs"), "C:_src_main.rs");
        assert_eq!(sanitize_path("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_file_names() {
        let write = CodeChange::write(SourcePosition::Record(2), "/a/b.py", "");
        let edit = CodeChange::edit(SourcePosition::Record(5), "/a/b.py", "", "");
        assert_eq!(export_file_name(1, &write), "001_write_a_b.py");
        assert_eq!(export_file_name(12, &edit), "012_edit_a_b.py.diff");
    }

    #[test]
    fn test_render_export_header() {
        let change = CodeChange::write(SourcePosition::Step(json!(3)), "hello.py", "print(1)\n");
        assert_eq!(
            render_export(&change),
            "# Source: line 3, tool: Write\n# Target: hello.py\n\nprint(1)\n"
        );
    }
}
