//! Runkeeper post statistics CLI library.
//!
//! This crate provides the CLI interface over `rk-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{ChartKind, Cli, Commands};
pub use config::{Config, DEFAULT_DATE_FORMAT};
