//! About command: post counts, categories, and date range.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use rk_core::Post;
use rk_core::summary::{Summary, format_percentage, summarize};

use super::util::format_date;

/// Formats the human-readable summary.
pub fn format_about(summary: &Summary, date_format: &str) -> String {
    let mut output = String::new();

    let first = summary
        .first_date
        .map_or_else(|| "N/A".to_string(), |d| format_date(d, date_format));
    let last = summary
        .last_date
        .map_or_else(|| "N/A".to_string(), |d| format_date(d, date_format));

    writeln!(output, "POSTS").unwrap();
    writeln!(output, "─────").unwrap();
    writeln!(output, "Total posts:  {}", summary.total).unwrap();
    writeln!(output, "First post:   {first}").unwrap();
    writeln!(output, "Last post:    {last}").unwrap();

    writeln!(output).unwrap();
    writeln!(output, "BY CATEGORY").unwrap();
    writeln!(output, "───────────").unwrap();
    for entry in &summary.categories {
        writeln!(
            output,
            "{:<16}{:>5}  {:>7}",
            entry.category.as_str(),
            entry.count,
            format_percentage(entry.percentage)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "WRITTEN").unwrap();
    writeln!(output, "───────").unwrap();
    writeln!(
        output,
        "{:<27}{:>5}  {:>7}",
        "Posts with commentary:",
        summary.written,
        format_percentage(summary.written_percentage)
    )
    .unwrap();
    writeln!(
        output,
        "{:<27}{:>5}  {:>7}",
        "Completed with commentary:",
        summary.completed_written,
        format_percentage(summary.completed_written_percentage)
    )
    .unwrap();

    output
}

/// Runs the about command.
pub fn run<W: io::Write>(
    writer: &mut W,
    posts: &[Post],
    date_format: &str,
    json: bool,
) -> Result<()> {
    let summary = summarize(posts);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_about(&summary, date_format))?;
    }

    Ok(())
}
