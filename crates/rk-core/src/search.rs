//! Table rows for posts, and search over posts with commentary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::activity::ActivityType;
use crate::category::Category;
use crate::post::Post;
use crate::types::Miles;

/// Every derived field of one post, numbered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRow {
    /// 1-based position.
    pub number: usize,
    pub text: String,
    pub time: Option<DateTime<Utc>>,
    pub category: Category,
    /// `None` when the post has no commentary.
    pub commentary: Option<String>,
    pub activity: ActivityType,
    pub distance: Miles,
    pub link: Option<String>,
}

impl PostRow {
    pub fn from_post(number: usize, post: &Post) -> Self {
        Self {
            number,
            text: post.text().to_string(),
            time: post.time(),
            category: post.category(),
            commentary: post.has_commentary().then(|| post.commentary_text()),
            activity: post.activity_type(),
            distance: post.distance_miles(),
            link: post.activity_link().map(str::to_string),
        }
    }
}

/// Builds numbered rows for every post.
pub fn post_rows(posts: &[Post]) -> Vec<PostRow> {
    posts
        .iter()
        .enumerate()
        .map(|(idx, post)| PostRow::from_post(idx + 1, post))
        .collect()
}

/// One post with commentary, numbered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenRow {
    pub number: usize,
    pub text: String,
    pub time: Option<DateTime<Utc>>,
    /// The activity type for completed events, otherwise `N/A`.
    pub activity: String,
    pub commentary: String,
}

/// Posts with commentary matching a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The trimmed query; empty means "all".
    pub query: String,
    pub count: usize,
    pub rows: Vec<WrittenRow>,
}

/// Posts that carry author commentary.
pub fn written_posts(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| p.has_commentary()).collect()
}

/// Searches posts with commentary. A blank query matches all of them.
pub fn search_written(posts: &[Post], query: &str) -> SearchResult {
    let query = query.trim();

    let rows: Vec<WrittenRow> = written_posts(posts)
        .into_iter()
        .filter(|p| p.matches_search(query))
        .enumerate()
        .map(|(idx, post)| {
            let activity = if post.category() == Category::CompletedEvent {
                post.activity_type().to_string()
            } else {
                "N/A".to_string()
            };
            WrittenRow {
                number: idx + 1,
                text: post.text().to_string(),
                time: post.time(),
                activity,
                commentary: post.commentary_text(),
            }
        })
        .collect();

    tracing::debug!(query, matches = rows.len(), "searched written posts");

    SearchResult {
        query: query.to_string(),
        count: rows.len(),
        rows,
    }
}
