use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use jv_engine::summarize;
use jv_providers::LoadedLog;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, path: &Path, log: &LoadedLog) -> Result<()> {
    let summary = summarize(&log.records);
    let result = presenters::present_summary(path, log, summary);
    ctx.render(result)
}
