use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use jv_engine::record_at;
use jv_providers::LoadedLog;

pub fn handle(ctx: &HandlerContext, log: &LoadedLog, line: usize) -> Result<()> {
    let Some(record) = record_at(&log.records, line) else {
        bail!("line out of range (1-{})", log.len());
    };

    let result = presenters::present_record(line, record, ctx.truncate);
    ctx.render(result)
}
