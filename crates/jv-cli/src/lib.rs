// NOTE: jv layering
//
// Loading and format detection live in jv-providers, every report is a pure
// function in jv-engine, and this crate only decides which report to run and
// how to print it. Records stay `serde_json::Value` end to end: agent logs
// change shape between tool versions, so nothing here commits to a schema.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::{Mode, run};
