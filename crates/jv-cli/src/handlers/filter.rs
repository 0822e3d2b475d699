use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use jv_engine::filter_by_type;
use jv_providers::LoadedLog;

pub fn handle(ctx: &HandlerContext, log: &LoadedLog, type_filter: &str) -> Result<()> {
    let hits = filter_by_type(&log.records, type_filter);
    tracing::debug!("{} records with type={}", hits.len(), type_filter);

    if hits.is_empty() {
        eprintln!("No records with type='{}'", type_filter);
    }

    let result = presenters::present_records(type_filter, &hits, ctx.truncate);
    ctx.render(result)
}
