use crate::types::{LogLevel, OutputFormat};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  jv session.jsonl                       Summary of record types
  jv session.jsonl -l 5                  Pretty-print record 5
  jv session.jsonl -l 5 --truncate 500   Same, cut after 500 characters
  jv session.jsonl -t result             Every record with type=result
  jv session.jsonl -k type,message.usage.output_tokens
                                         Project (nested) fields per record
  jv claude-code.txt -a                  Deep analysis of a Claude Code log
  jv trajectory.json -c                  Code written or edited by the agent
  jv claude-code.txt -c -o ./codes       Also save every change under ./codes

Useful fields in Claude Code logs:
  type                                   system | assistant | user | result
  result.total_cost_usd                  total cost
  result.duration_ms                     wall time
  result.usage.cache_read_input_tokens   cache hits
  assistant.message.content[].type       text (reasoning) or tool_use
  user.message.content[].is_error        tool failure

Only one mode runs per invocation: -l, then -t, -k, -a, -c, else the summary.";

#[derive(Parser, Debug)]
#[command(name = "jv")]
#[command(about = "Inspect JSONL and trajectory logs of AI coding agents", long_about = None)]
#[command(version, disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Log file: JSON lines, or a trajectory document with a `steps` array
    pub file: PathBuf,

    /// Pretty-print the record at this 1-based position
    #[arg(short = 'l', long, value_name = "N")]
    pub line: Option<usize>,

    /// Show every record whose `type` equals this value
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_filter: Option<String>,

    /// Comma-separated field paths to project, dotted for nesting
    #[arg(short = 'k', long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Deep analysis of a Claude Code stream-json log
    #[arg(short = 'a', long)]
    pub analyze: bool,

    /// Extract files written or edited by the agent
    #[arg(short = 'c', long)]
    pub code: bool,

    /// Save extracted code changes into this directory (with --code)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Cut pretty-printed records after N characters
    #[arg(long, value_name = "N")]
    pub truncate: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Diagnostic verbosity on stderr; JV_LOG overrides it
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Config file (defaults to $JV_CONFIG, then <config dir>/jv/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, visible_short_alias = 'V', action = ArgAction::Version)]
    version: Option<bool>,
}
