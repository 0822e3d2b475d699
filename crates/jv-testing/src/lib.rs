//! Testing infrastructure for jv integration tests.
//!
//! This crate provides utilities for writing integration tests:
//! - `TestWorld`: isolated temp directory plus a configured `jv` runner
//! - `fixtures`: sample log files shipped with the providers crate
//! - `records`: builders for Claude Code and trajectory records
//! - `assertions`: output checks that read better than raw `contains`

pub mod assertions;
pub mod fixtures;
pub mod records;
pub mod world;

pub use world::{CliResult, TestWorld};
