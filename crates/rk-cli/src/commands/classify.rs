//! Classify command: derive every field from text given on the command line.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use rk_core::Post;
use rk_core::search::{PostRow, post_rows};

use super::util::format_distance;

fn format_classification(row: &PostRow) -> String {
    let mut output = String::new();

    let commentary = row
        .commentary
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or("No written content");

    writeln!(output, "Text:        {}", row.text).unwrap();
    writeln!(output, "Category:    {}", row.category).unwrap();
    writeln!(output, "Commentary:  {commentary}").unwrap();
    writeln!(output, "Activity:    {}", row.activity).unwrap();
    writeln!(output, "Distance:    {}", format_distance(row.distance)).unwrap();
    writeln!(
        output,
        "Link:        {}",
        row.link.as_deref().unwrap_or("No Link")
    )
    .unwrap();

    output
}

/// Runs the classify command. Posts have no timestamp.
pub fn run<W: io::Write>(writer: &mut W, texts: &[String], json: bool) -> Result<()> {
    let posts: Vec<Post> = texts.iter().map(|t| Post::new(t.as_str(), "")).collect();
    let rows = post_rows(&posts);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    let blocks: Vec<String> = rows.iter().map(format_classification).collect();
    write!(writer, "{}", blocks.join("\n"))?;
    Ok(())
}
