//! Chart command: Vega-Lite specs for the activity data.

use std::io;

use anyhow::Result;
use rk_core::Post;
use rk_core::activities::analyze;
use rk_core::chart::{activity_counts_spec, distance_means_spec, distance_points_spec};

use crate::cli::ChartKind;

/// Runs the chart command, printing the spec as pretty JSON.
pub fn run<W: io::Write>(writer: &mut W, posts: &[Post], kind: ChartKind, top: usize) -> Result<()> {
    let report = analyze(posts, top);

    let spec = match kind {
        ChartKind::ActivityCounts => activity_counts_spec(&report.counts),
        ChartKind::Distances => distance_points_spec(&report.points),
        ChartKind::DistanceMeans => distance_means_spec(&report.points),
    };

    writeln!(writer, "{}", serde_json::to_string_pretty(&spec)?)?;
    Ok(())
}
