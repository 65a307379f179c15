//! Collection-level counts, percentages, and date range.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::category::Category;
use crate::post::Post;

/// Number of posts in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
    pub percentage: f64,
}

/// Overview of a post collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Earliest valid timestamp.
    pub first_date: Option<DateTime<Utc>>,
    /// Latest valid timestamp.
    pub last_date: Option<DateTime<Utc>>,
    /// One entry per category, in `Category::ALL` order.
    pub categories: Vec<CategoryCount>,
    /// Posts with commentary, out of all posts.
    pub written: usize,
    pub written_percentage: f64,
    /// Completed events with commentary, out of completed events.
    pub completed_written: usize,
    pub completed_written_percentage: f64,
}

impl Summary {
    /// Count for a single category.
    pub fn count(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.count)
    }
}

/// Share of `part` in `whole` as a percentage. Zero when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Formats a percentage with two decimals, e.g. `33.33%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Summarizes a post collection.
pub fn summarize(posts: &[Post]) -> Summary {
    let total = posts.len();

    let times = posts.iter().filter_map(Post::time);
    let first_date = times.clone().min();
    let last_date = times.max();

    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let count = posts.iter().filter(|p| p.category() == category).count();
            CategoryCount {
                category,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect::<Vec<_>>();

    let written = posts.iter().filter(|p| p.has_commentary()).count();

    let completed: Vec<&Post> = posts
        .iter()
        .filter(|p| p.category() == Category::CompletedEvent)
        .collect();
    let completed_written = completed.iter().filter(|p| p.has_commentary()).count();

    Summary {
        total,
        first_date,
        last_date,
        categories,
        written,
        written_percentage: percentage(written, total),
        completed_written,
        completed_written_percentage: percentage(completed_written, completed.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Post> {
        vec![
            Post::new(
                "Just completed a 5.00 km run - felt great",
                "Mon Oct 01 07:00:00 +0000 2018",
            ),
            Post::new("Just completed a 2 mi walk", "Sat Sep 29 19:40:05 +0000 2018"),
            Post::new("Watch my live run right now", "Tue Oct 02 12:00:00 +0000 2018"),
            Post::new("Unlocked an Achievement: fastest 5K", "not a date"),
        ]
    }

    #[test]
    fn counts_categories() {
        let summary = summarize(&sample());

        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(Category::CompletedEvent), 2);
        assert_eq!(summary.count(Category::LiveEvent), 1);
        assert_eq!(summary.count(Category::Achievement), 1);
        assert_eq!(summary.count(Category::Miscellaneous), 0);
        assert_eq!(
            summary.categories.iter().map(|c| c.category).collect::<Vec<_>>(),
            Category::ALL.to_vec()
        );
    }

    #[test]
    fn date_range_ignores_invalid_timestamps() {
        let summary = summarize(&sample());

        assert_eq!(
            summary.first_date.unwrap().to_rfc3339(),
            "2018-09-29T19:40:05+00:00"
        );
        assert_eq!(
            summary.last_date.unwrap().to_rfc3339(),
            "2018-10-02T12:00:00+00:00"
        );
    }

    #[test]
    fn written_counts() {
        let summary = summarize(&sample());

        assert_eq!(summary.written, 2);
        assert_eq!(format_percentage(summary.written_percentage), "50.00%");
        assert_eq!(summary.completed_written, 1);
        assert_eq!(
            format_percentage(summary.completed_written_percentage),
            "50.00%"
        );
    }

    #[test]
    fn empty_collection() {
        let summary = summarize(&[]);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.first_date, None);
        assert_eq!(summary.last_date, None);
        assert!(summary.categories.iter().all(|c| c.count == 0));
        assert_eq!(format_percentage(summary.written_percentage), "0.00%");
    }

    #[test]
    fn percentage_formatting() {
        assert_eq!(format_percentage(percentage(1, 3)), "33.33%");
        assert_eq!(format_percentage(percentage(2, 3)), "66.67%");
        assert_eq!(format_percentage(percentage(3, 3)), "100.00%");
        assert_eq!(format_percentage(percentage(1, 0)), "0.00%");
    }
}
