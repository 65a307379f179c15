//! Core logic for Runkeeper post statistics.
//!
//! This crate contains:
//! - The post model: category, commentary, activity type, distance, and link
//!   derived from free-form post text
//! - Loading raw post records from JSON exports
//! - Aggregations: summary counts, activity/distance analysis, written-post search
//! - Vega-Lite chart specs for the aggregated data

pub mod activities;
mod activity;
mod category;
pub mod chart;
pub mod load;
mod post;
pub mod search;
pub mod summary;
mod types;

pub use activity::ActivityType;
pub use category::Category;
pub use load::{LoadError, RawPost, load_posts, parse_raw_posts, posts_from_raw};
pub use post::{
    Post, activity_link, commentary_text, distance_miles, has_commentary, parse_timestamp,
};
pub use types::{KM_TO_MILES, Miles, UnknownLabel};

/// Classifies post text. Free-function form of [`Category::from_text`].
pub fn category(text: &str) -> Category {
    Category::from_text(text)
}

/// Infers the activity type. Free-function form of [`ActivityType::from_text`].
pub fn activity_type(text: &str, category: Category) -> ActivityType {
    ActivityType::from_text(text, category)
}
