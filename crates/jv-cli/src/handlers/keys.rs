use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use jv_engine::{parse_key_list, project};
use jv_providers::LoadedLog;

pub fn handle(ctx: &HandlerContext, log: &LoadedLog, raw_keys: &str) -> Result<()> {
    let keys = parse_key_list(raw_keys);
    let rows = project(&log.records, &keys);

    if rows.is_empty() {
        eprintln!("No records contain any of: {}", keys.join(", "));
    }

    let result = presenters::present_projection(keys, rows);
    ctx.render(result)
}
