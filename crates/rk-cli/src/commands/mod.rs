//! CLI subcommand implementations.

pub mod about;
pub mod activities;
pub mod chart;
pub mod classify;
pub mod descriptions;
pub mod posts;
pub mod util;
