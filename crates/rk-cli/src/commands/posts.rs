//! Posts command: every post with its derived fields.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use rk_core::Post;
use rk_core::search::{PostRow, post_rows};

use super::util::{format_distance, format_post_date};

/// Formats one post row as an indented block.
pub fn format_row(row: &PostRow, date_format: &str) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{:>3}. {} | {} | {} | {}",
        row.number,
        format_post_date(row.time, date_format),
        row.category,
        row.activity,
        format_distance(row.distance)
    )
    .unwrap();
    writeln!(output, "     {}", row.text).unwrap();
    writeln!(
        output,
        "     Commentary: {}",
        row.commentary
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("No written content")
    )
    .unwrap();
    writeln!(
        output,
        "     Link: {}",
        row.link.as_deref().unwrap_or("No Link")
    )
    .unwrap();

    output
}

/// Formats the posts table.
pub fn format_posts(rows: &[PostRow], total: usize, date_format: &str) -> String {
    let mut output = String::new();

    writeln!(output, "POSTS ({} of {total})", rows.len()).unwrap();
    for row in rows {
        writeln!(output).unwrap();
        output.push_str(&format_row(row, date_format));
    }

    output
}

/// Runs the posts command.
pub fn run<W: io::Write>(
    writer: &mut W,
    posts: &[Post],
    limit: Option<usize>,
    date_format: &str,
    json: bool,
) -> Result<()> {
    let shown = &posts[..limit.unwrap_or(posts.len()).min(posts.len())];
    let rows = post_rows(shown);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        write!(writer, "{}", format_posts(&rows, posts.len(), date_format))?;
    }

    Ok(())
}
