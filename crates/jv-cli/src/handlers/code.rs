use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use jv_engine::{export_changes, extract_code_changes};
use jv_providers::LoadedLog;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, log: &LoadedLog, output_dir: Option<&Path>) -> Result<()> {
    let changes = extract_code_changes(&log.records, log.format);

    // Nothing to save when the log has no changes; the directory is not created
    let exported = match output_dir {
        Some(dir) if !changes.is_empty() => Some((dir, export_changes(&changes, dir)?)),
        _ => None,
    };

    let result =
        presenters::present_code_report(&changes, exported, ctx.display.code_preview_chars);
    ctx.render(result)
}
