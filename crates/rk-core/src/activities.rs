//! Activity and distance analysis over completed events.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::activity::ActivityType;
use crate::category::Category;
use crate::post::Post;
use crate::types::Miles;

/// Day names indexed by days from Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Number of posts for one activity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub activity: ActivityType,
    pub count: usize,
}

/// Mean distance for one activity type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanDistance {
    pub activity: ActivityType,
    pub miles: f64,
}

/// One dated distance, shaped for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistancePoint {
    pub activity: ActivityType,
    /// Days from Sunday (0-6).
    pub day: u32,
    pub day_name: &'static str,
    pub distance: Miles,
    pub is_weekend: bool,
    pub date: NaiveDate,
}

/// Which part of the week had the longer mean distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LongerPeriod {
    Weekends,
    Weekdays,
}

impl fmt::Display for LongerPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekends => write!(f, "weekends"),
            Self::Weekdays => write!(f, "weekdays"),
        }
    }
}

/// Result of analyzing completed activities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityReport {
    pub distinct_types: usize,
    /// Sorted by count descending, ties in activity order.
    pub counts: Vec<ActivityCount>,
    pub top: Vec<ActivityType>,
    /// Mean distance for each top activity, in `top` order.
    pub mean_distances: Vec<MeanDistance>,
    pub longest: Option<ActivityType>,
    pub shortest: Option<ActivityType>,
    /// Dated distances for the top activities.
    pub points: Vec<DistancePoint>,
    pub longer_on: Option<LongerPeriod>,
}

/// Completed events with an inferred activity and a non-zero distance.
pub fn measured_activities(posts: &[Post]) -> Vec<&Post> {
    posts
        .iter()
        .filter(|p| {
            p.category() == Category::CompletedEvent
                && p.activity_type().is_known()
                && !p.distance_miles().is_zero()
        })
        .collect()
}

/// Analyzes activity types and distances, keeping the `top_n` most common.
pub fn analyze(posts: &[Post], top_n: usize) -> ActivityReport {
    let measured = measured_activities(posts);

    let mut by_type: BTreeMap<ActivityType, Vec<Miles>> = BTreeMap::new();
    for post in &measured {
        by_type
            .entry(post.activity_type())
            .or_default()
            .push(post.distance_miles());
    }

    let mut counts: Vec<ActivityCount> = by_type
        .iter()
        .map(|(activity, distances)| ActivityCount {
            activity: *activity,
            count: distances.len(),
        })
        .collect();
    counts.sort_by_key(|c| std::cmp::Reverse(c.count));

    let top: Vec<ActivityType> = counts.iter().take(top_n).map(|c| c.activity).collect();

    let mean_distances: Vec<MeanDistance> = top
        .iter()
        .map(|activity| MeanDistance {
            activity: *activity,
            miles: by_type.get(activity).map_or(0.0, |d| mean(d.iter().copied())),
        })
        .collect();

    let mut ranked = mean_distances.clone();
    ranked.sort_by(|a, b| b.miles.total_cmp(&a.miles));
    let longest = ranked.first().map(|m| m.activity);
    let shortest = ranked.last().map(|m| m.activity);

    let points = distance_points(&measured, &top);
    let longer_on = longer_period(&points);

    ActivityReport {
        distinct_types: by_type.len(),
        counts,
        top,
        mean_distances,
        longest,
        shortest,
        points,
        longer_on,
    }
}

fn distance_points(measured: &[&Post], top: &[ActivityType]) -> Vec<DistancePoint> {
    let mut undated = 0_usize;
    let points: Vec<DistancePoint> = measured
        .iter()
        .filter(|p| top.contains(&p.activity_type()))
        .filter_map(|p| {
            let Some(time) = p.time() else {
                undated += 1;
                return None;
            };
            let day = time.weekday().num_days_from_sunday();
            Some(DistancePoint {
                activity: p.activity_type(),
                day,
                day_name: DAY_NAMES[day as usize],
                distance: p.distance_miles(),
                is_weekend: day == 0 || day == 6,
                date: time.date_naive(),
            })
        })
        .collect();

    if undated > 0 {
        tracing::warn!(undated, "activities without a valid timestamp left out of day analysis");
    }
    points
}

/// Weekends win only when strictly longer on average.
fn longer_period(points: &[DistancePoint]) -> Option<LongerPeriod> {
    if points.is_empty() {
        return None;
    }

    let weekend = mean(points.iter().filter(|p| p.is_weekend).map(|p| p.distance));
    let weekday = mean(points.iter().filter(|p| !p.is_weekend).map(|p| p.distance));

    Some(if weekend > weekday {
        LongerPeriod::Weekends
    } else {
        LongerPeriod::Weekdays
    })
}

#[allow(clippy::cast_precision_loss)]
fn mean(distances: impl Iterator<Item = Miles>) -> f64 {
    let (sum, n) = distances.fold((0.0, 0_usize), |(sum, n), d| (sum + d.value(), n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str, created_at: &str) -> Post {
        Post::new(text, created_at)
    }

    fn sample() -> Vec<Post> {
        vec![
            // Saturday
            post("Just completed a 10.00 km run", "Sat Sep 29 08:00:00 +0000 2018"),
            // Sunday
            post("Just completed a 6.00 mi run", "Sun Sep 30 08:00:00 +0000 2018"),
            // Monday
            post("Just completed a 2.00 mi run", "Mon Oct 01 08:00:00 +0000 2018"),
            post("Just completed a 1.50 mi walk", "Mon Oct 01 18:00:00 +0000 2018"),
            // Tuesday
            post("Just completed a 2.50 mi walk", "Tue Oct 02 18:00:00 +0000 2018"),
            post("Just completed a 20.00 km bike", "Wed Oct 03 18:00:00 +0000 2018"),
            post("Just completed a 1 mi swim", "Thu Oct 04 18:00:00 +0000 2018"),
            // Not counted: no distance, not completed
            post("Just completed a workout", "Thu Oct 04 19:00:00 +0000 2018"),
            post("Watch my live run right now 5 km", "Thu Oct 04 19:00:00 +0000 2018"),
        ]
    }

    #[test]
    fn measured_requires_completed_activity_with_distance() {
        let posts = sample();
        assert_eq!(measured_activities(&posts).len(), 7);
    }

    #[test]
    fn counts_sorted_with_stable_ties() {
        let report = analyze(&sample(), 3);

        assert_eq!(report.distinct_types, 4);
        let counts: Vec<(ActivityType, usize)> =
            report.counts.iter().map(|c| (c.activity, c.count)).collect();
        assert_eq!(
            counts,
            vec![
                (ActivityType::Run, 3),
                (ActivityType::Walk, 2),
                (ActivityType::Bike, 1),
                (ActivityType::Swim, 1),
            ]
        );
        assert_eq!(
            report.top,
            vec![ActivityType::Run, ActivityType::Walk, ActivityType::Bike]
        );
    }

    #[test]
    fn longest_and_shortest_by_mean() {
        let report = analyze(&sample(), 3);

        // bike 12.43, run (6.21 + 6 + 2) / 3, walk 2.0
        assert_eq!(report.longest, Some(ActivityType::Bike));
        assert_eq!(report.shortest, Some(ActivityType::Walk));
        let walk = &report.mean_distances[1];
        assert_eq!(walk.activity, ActivityType::Walk);
        assert!((walk.miles - 2.0).abs() < 1e-9);
    }

    #[test]
    fn points_cover_top_activities_only() {
        let report = analyze(&sample(), 3);

        assert_eq!(report.points.len(), 6);
        assert!(report.points.iter().all(|p| p.activity != ActivityType::Swim));

        let first = &report.points[0];
        assert_eq!(first.day, 6);
        assert_eq!(first.day_name, "Saturday");
        assert!(first.is_weekend);
        assert_eq!(first.date.to_string(), "2018-09-29");
    }

    #[test]
    fn weekend_distances_are_longer() {
        let report = analyze(&sample(), 3);
        assert_eq!(report.longer_on, Some(LongerPeriod::Weekends));
    }

    #[test]
    fn undated_posts_are_left_out_of_points() {
        let posts = vec![
            post("Just completed a 3 mi run", "bad"),
            post("Just completed a 4 mi run", "Mon Oct 01 08:00:00 +0000 2018"),
        ];
        let report = analyze(&posts, 3);

        assert_eq!(report.counts[0].count, 2);
        assert_eq!(report.points.len(), 1);
        assert_eq!(report.longer_on, Some(LongerPeriod::Weekdays));
    }

    #[test]
    fn empty_input() {
        let report = analyze(&[], 3);

        assert_eq!(report.distinct_types, 0);
        assert!(report.top.is_empty());
        assert_eq!(report.longest, None);
        assert_eq!(report.shortest, None);
        assert_eq!(report.longer_on, None);
    }

    #[test]
    fn point_serializes_with_chart_field_names() {
        let report = analyze(&sample(), 1);
        let json = serde_json::to_value(&report.points[0]).unwrap();

        assert_eq!(json["activity"], "run");
        assert_eq!(json["dayName"], "Saturday");
        assert_eq!(json["isWeekend"], true);
        assert_eq!(json["distance"], 6.21);
        assert_eq!(json["date"], "2018-09-29");
    }
}
