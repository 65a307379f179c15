//! Activities command: activity types and distances of completed events.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use rk_core::Post;
use rk_core::activities::{ActivityReport, analyze};

/// Formats the human-readable activity report.
pub fn format_activities(report: &ActivityReport) -> String {
    let mut output = String::new();

    writeln!(output, "ACTIVITIES").unwrap();
    writeln!(output, "──────────").unwrap();

    if report.counts.is_empty() {
        writeln!(output, "No completed activities with a distance.").unwrap();
        return output;
    }

    let top = report
        .top
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(output, "Distinct activity types:  {}", report.distinct_types).unwrap();
    writeln!(output, "Top activities:           {top}").unwrap();

    writeln!(output).unwrap();
    writeln!(output, "BY ACTIVITY").unwrap();
    writeln!(output, "───────────").unwrap();
    for entry in &report.counts {
        writeln!(output, "{:<10}{:>5}", entry.activity.as_str(), entry.count).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "MEAN DISTANCE").unwrap();
    writeln!(output, "─────────────").unwrap();
    for entry in &report.mean_distances {
        writeln!(output, "{:<10}{:>8.2} mi", entry.activity.as_str(), entry.miles).unwrap();
    }

    writeln!(output).unwrap();
    if let (Some(longest), Some(shortest)) = (report.longest, report.shortest) {
        writeln!(output, "Longest on average:   {longest}").unwrap();
        writeln!(output, "Shortest on average:  {shortest}").unwrap();
    }
    if let Some(period) = report.longer_on {
        writeln!(output, "Longer distances on:  {period}").unwrap();
    }

    output
}

/// Runs the activities command.
pub fn run<W: io::Write>(writer: &mut W, posts: &[Post], top: usize, json: bool) -> Result<()> {
    let report = analyze(posts, top);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(writer, "{}", format_activities(&report))?;
    }

    Ok(())
}
