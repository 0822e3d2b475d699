use std::fmt;

use crate::presentation::formatters::{format_cost, format_seconds, or_na};
use crate::presentation::view_models::{AnalysisViewModel, CreateView, ExcerptViewModel};
use jv_types::display_value;

impl CreateView for AnalysisViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(AnalysisView { data: self })
    }
}

struct AnalysisView<'a> {
    data: &'a AnalysisViewModel,
}

fn write_excerpts(f: &mut fmt::Formatter<'_>, excerpts: &[ExcerptViewModel]) -> fmt::Result {
    for excerpt in excerpts {
        // excerpts are previews, always marked as such
        writeln!(f, "  line {}: {}...", excerpt.position, excerpt.text)?;
    }
    Ok(())
}

impl<'a> fmt::Display for AnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(session) = &self.data.session {
            writeln!(f, "[Session]")?;
            writeln!(f, "  Model: {}", or_na(session.model.as_deref()))?;
            writeln!(f, "  Version: {}", or_na(session.version.as_deref()))?;
            writeln!(f, "  Working dir: {}", or_na(session.cwd.as_deref()))?;
            writeln!(f, "  Tools: {}", session.tool_count)?;
            writeln!(f)?;
        }

        if let Some(outcome) = &self.data.outcome {
            writeln!(f, "[Outcome]")?;
            let status = if outcome.success { "success" } else { "failed" };
            writeln!(f, "  Status: {}", status)?;
            writeln!(f, "  Duration: {}", format_seconds(outcome.duration_secs))?;
            writeln!(f, "  Turns: {}", or_na(outcome.num_turns.as_deref()))?;
            writeln!(f, "  Cost: {}", format_cost(outcome.total_cost_usd))?;
            writeln!(f)?;

            writeln!(f, "[Token usage]")?;
            let usage = &outcome.usage;
            writeln!(f, "  Input: {}", display_value(&usage.input_tokens))?;
            writeln!(f, "  Output: {}", display_value(&usage.output_tokens))?;
            writeln!(f, "  Cache read: {}", display_value(&usage.cache_read_input_tokens))?;
            writeln!(
                f,
                "  Cache creation: {}",
                display_value(&usage.cache_creation_input_tokens)
            )?;
            writeln!(f)?;
        }

        writeln!(f, "[Tool calls]")?;
        for tool in &self.data.tools {
            writeln!(f, "  {}: {}", tool.name, tool.count)?;
        }

        if !self.data.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "[Errors ({})]", self.data.errors.len())?;
            write_excerpts(f, &self.data.errors)?;
        }

        writeln!(f)?;
        writeln!(f, "[Reasoning]")?;
        write_excerpts(f, &self.data.thoughts)
    }
}
