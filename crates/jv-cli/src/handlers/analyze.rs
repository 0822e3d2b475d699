use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use jv_engine::analyze;
use jv_providers::LoadedLog;

pub fn handle(ctx: &HandlerContext, log: &LoadedLog) -> Result<()> {
    let analysis = analyze(&log.records, &ctx.display.analysis_options());
    let result = presenters::present_analysis(analysis);
    ctx.render(result)
}
