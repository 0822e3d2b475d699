use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SkippedLineViewModel, SummaryViewModel, TypeCountViewModel,
};
use jv_engine::LogSummary;
use jv_providers::LoadedLog;

pub fn present_summary(
    path: &Path,
    log: &LoadedLog,
    summary: LogSummary,
) -> CommandResultViewModel<SummaryViewModel> {
    let file_path = path.display().to_string();

    let content = SummaryViewModel {
        file_path: file_path.clone(),
        format: log.format.to_string(),
        total_records: summary.total,
        skipped_lines: log
            .skipped
            .iter()
            .map(|s| SkippedLineViewModel {
                line: s.line,
                message: s.message.clone(),
            })
            .collect(),
        types: summary
            .types
            .into_iter()
            .map(|c| TypeCountViewModel {
                type_name: c.key,
                count: c.count,
            })
            .collect(),
        claude_code_log: summary.has_init_record,
    };

    let mut result = CommandResultViewModel::new(content);
    if summary.has_init_record {
        result = result.with_suggestion(
            Guidance::new("Claude Code log detected, see the deep analysis")
                .with_command(format!("jv {} --analyze", file_path)),
        );
    }
    result
}
