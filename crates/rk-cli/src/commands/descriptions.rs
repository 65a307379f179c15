//! Descriptions command: posts with written commentary, with optional search.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use rk_core::Post;
use rk_core::search::{SearchResult, search_written};

use super::util::format_post_date;

/// Formats the human-readable list of written posts.
pub fn format_descriptions(result: &SearchResult, date_format: &str) -> String {
    let mut output = String::new();

    if result.query.is_empty() {
        writeln!(output, "WRITTEN POSTS: {} (all)", result.count).unwrap();
    } else {
        writeln!(
            output,
            "WRITTEN POSTS: {} matching \"{}\"",
            result.count, result.query
        )
        .unwrap();
    }
    writeln!(output).unwrap();

    if result.rows.is_empty() {
        if result.query.is_empty() {
            writeln!(output, "No written posts available.").unwrap();
        } else {
            writeln!(output, "No written posts found matching \"{}\".", result.query).unwrap();
        }
        return output;
    }

    writeln!(
        output,
        "{:>3}  {:<12}  {:<8}  Commentary",
        "#", "Date", "Activity"
    )
    .unwrap();
    writeln!(output, "───  ────────────  ────────  ──────────────────────").unwrap();
    for row in &result.rows {
        let commentary = if row.commentary.is_empty() {
            "No written content"
        } else {
            row.commentary.as_str()
        };
        writeln!(
            output,
            "{:>3}  {:<12}  {:<8}  {commentary}",
            row.number,
            format_post_date(row.time, date_format),
            row.activity
        )
        .unwrap();
    }

    output
}

/// Runs the descriptions command.
pub fn run<W: io::Write>(
    writer: &mut W,
    posts: &[Post],
    query: Option<&str>,
    date_format: &str,
    json: bool,
) -> Result<()> {
    let result = search_written(posts, query.unwrap_or_default());

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write!(writer, "{}", format_descriptions(&result, date_format))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::config::DEFAULT_DATE_FORMAT;

    fn sample() -> Vec<Post> {
        vec![
            Post::new(
                "Just completed a 5 km run - Loved the sunrise",
                "Sat Sep 29 06:10:00 +0000 2018",
            ),
            Post::new("Just completed a 2 mi walk", "Sun Sep 30 08:00:00 +0000 2018"),
            Post::new("Achievement unlocked: longest ride", "Mon Oct 01 12:00:00 +0000 2018"),
            Post::new("Just completed a 3 mi walk: https://rk.example/w", "bad"),
        ]
    }

    #[test]
    fn descriptions_all() {
        let result = search_written(&sample(), "");
        assert_snapshot!(format_descriptions(&result, DEFAULT_DATE_FORMAT), @r#"
        WRITTEN POSTS: 3 (all)

          #  Date          Activity  Commentary
        ───  ────────────  ────────  ──────────────────────
          1  9/29/2018     run       Loved the sunrise
          2  10/1/2018     N/A       longest ride
          3  Invalid Date  walk      No written content
        "#);
    }

    #[test]
    fn descriptions_no_match() {
        let result = search_written(&sample(), "marathon");
        assert_snapshot!(format_descriptions(&result, DEFAULT_DATE_FORMAT), @r#"
        WRITTEN POSTS: 0 matching "marathon"

        No written posts found matching "marathon".
        "#);
    }

    #[test]
    fn descriptions_json_search() {
        let mut out = Vec::new();
        run(&mut out, &sample(), Some("SUNRISE"), DEFAULT_DATE_FORMAT, true).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["query"], "SUNRISE");
        assert_eq!(json["count"], 1);
        assert_eq!(json["rows"][0]["commentary"], "Loved the sunrise");
    }
}
