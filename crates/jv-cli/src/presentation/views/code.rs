use std::fmt;

use crate::presentation::formatters::{count_label, rule};
use crate::presentation::view_models::{CodeReportViewModel, CreateView};
use jv_engine::preview_payload;

impl CreateView for CodeReportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CodeReportView { data: self })
    }
}

struct CodeReportView<'a> {
    data: &'a CodeReportViewModel,
}

impl<'a> CodeReportView<'a> {
    fn write_files(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Files]")?;
        for stats in &self.data.files {
            let mut parts = Vec::new();
            if stats.writes > 0 {
                parts.push(count_label(stats.writes, "write"));
            }
            if stats.edits > 0 {
                parts.push(count_label(stats.edits, "edit"));
            }
            writeln!(f, "  {}: {}", stats.file_path, parts.join(", "))?;
        }
        Ok(())
    }

    fn write_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.data.total;
        for change in &self.data.changes {
            writeln!(f)?;
            writeln!(f, "{}", rule('─'))?;
            writeln!(
                f,
                "[{}/{}] line {}: {} → {}",
                change.index, total, change.source, change.tool, change.file_path
            )?;
            writeln!(f, "{}", rule('─'))?;

            let preview = preview_payload(&change.payload, self.data.preview_chars);
            writeln!(f, "{}", preview.text)?;
            if preview.truncated {
                writeln!(f)?;
                writeln!(f, "... ({} chars total, truncated)", preview.total_chars)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CodeReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.total == 0 {
            return Ok(());
        }

        writeln!(f, "Found {}", count_label(self.data.total, "code change"))?;
        writeln!(f)?;
        self.write_files(f)?;

        writeln!(f)?;
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "[Code]")?;
        writeln!(f, "{}", rule('='))?;
        self.write_changes(f)?;

        if let Some(export) = &self.data.export {
            writeln!(f)?;
            writeln!(f, "Saved to {}:", export.output_dir)?;
            for name in &export.files {
                writeln!(f, "  {}", name)?;
            }
        }

        Ok(())
    }
}
