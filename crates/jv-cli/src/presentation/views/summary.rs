use std::fmt;

use crate::presentation::formatters::count_label;
use crate::presentation::view_models::{CreateView, SummaryViewModel};

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(SummaryView { data: self })
    }
}

struct SummaryView<'a> {
    data: &'a SummaryViewModel,
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.data.file_path)?;
        writeln!(f, "Records: {}", self.data.total_records)?;
        writeln!(f, "Format: {}", self.data.format)?;
        if !self.data.skipped_lines.is_empty() {
            let lines: Vec<String> = self
                .data
                .skipped_lines
                .iter()
                .map(|s| s.line.to_string())
                .collect();
            let noun = if lines.len() == 1 { "line" } else { "lines" };
            writeln!(
                f,
                "Skipped: {} ({} {})",
                count_label(lines.len(), "malformed line"),
                noun,
                lines.join(", ")
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Types:")?;
        for entry in &self.data.types {
            writeln!(f, "  {}: {}", entry.type_name, entry.count)?;
        }

        Ok(())
    }
}
