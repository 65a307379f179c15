//! Loading raw post records from JSON or JSON Lines.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::post::Post;

/// Errors from reading raw post records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input")]
    Read(#[source] io::Error),

    #[error("invalid JSON array of posts")]
    Array(#[source] serde_json::Error),

    #[error("invalid JSON on line {line}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One record as supplied by the exporter.
///
/// Missing or null fields become empty strings so that a partial record
/// still becomes a post. Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPost {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses raw records from either a JSON array or JSON Lines.
pub fn parse_raw_posts<R: Read>(mut reader: R) -> Result<Vec<RawPost>, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(LoadError::Read)?;

    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        let records: Vec<RawPost> = serde_json::from_str(trimmed).map_err(LoadError::Array)?;
        tracing::trace!(count = records.len(), "parsed JSON array");
        return Ok(records);
    }

    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| LoadError::Line {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    tracing::trace!(count = records.len(), "parsed JSON lines");
    Ok(records)
}

/// Wraps raw records into posts, preserving input order.
pub fn posts_from_raw(records: Vec<RawPost>) -> Vec<Post> {
    records
        .into_par_iter()
        .map(|r| Post::new(r.text, &r.created_at))
        .collect()
}

/// Reads and wraps every post in a file.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_raw_posts(io::BufReader::new(file))?;
    let posts = posts_from_raw(records);

    let invalid = posts.iter().filter(|p| p.time().is_none()).count();
    if invalid > 0 {
        tracing::warn!(invalid, path = ?path, "posts with unparseable timestamps");
    }
    tracing::debug!(count = posts.len(), path = ?path, "loaded posts");
    Ok(posts)
}
