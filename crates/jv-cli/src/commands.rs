use super::args::Cli;
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging;
use anyhow::{Result, bail};
use jv_providers::load_log;

/// The single report an invocation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Line(usize),
    Type(String),
    Keys(String),
    Analyze,
    Code,
    Summary,
}

impl Mode {
    /// First requested mode in order: line, type, keys, analyze, code, summary.
    ///
    /// Empty `--type` / `--keys` values count as not given.
    pub fn from_cli(cli: &Cli) -> Self {
        if let Some(line) = cli.line {
            return Mode::Line(line);
        }
        if let Some(t) = cli.type_filter.as_deref().filter(|t| !t.is_empty()) {
            return Mode::Type(t.to_string());
        }
        if let Some(keys) = cli.keys.as_deref().filter(|k| !k.is_empty()) {
            return Mode::Keys(keys.to_string());
        }
        if cli.analyze {
            return Mode::Analyze;
        }
        if cli.code {
            return Mode::Code;
        }
        Mode::Summary
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;

    let log = load_log(&cli.file)?;
    if log.is_empty() {
        bail!(
            "{} is empty or has no valid JSON records",
            cli.file.display()
        );
    }
    tracing::debug!(
        "loaded {} records ({}) from {}",
        log.len(),
        log.format,
        cli.file.display()
    );

    let ctx = HandlerContext::new(cli.format, cli.truncate, config.display);

    match Mode::from_cli(&cli) {
        Mode::Line(line) => handlers::line::handle(&ctx, &log, line),
        Mode::Type(type_filter) => handlers::filter::handle(&ctx, &log, &type_filter),
        Mode::Keys(keys) => handlers::keys::handle(&ctx, &log, &keys),
        Mode::Analyze => handlers::analyze::handle(&ctx, &log),
        Mode::Code => handlers::code::handle(&ctx, &log, cli.output.as_deref()),
        Mode::Summary => handlers::summary::handle(&ctx, &cli.file, &log),
    }
}
