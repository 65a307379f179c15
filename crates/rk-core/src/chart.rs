//! Vega-Lite chart specifications for activity data.

use serde_json::{Value, json};

use crate::activities::{ActivityCount, DAY_NAMES, DistancePoint};

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Bar chart of post counts per activity type.
pub fn activity_counts_spec(counts: &[ActivityCount]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "description": "Number of posts for each activity type",
        "data": { "values": counts },
        "mark": "bar",
        "encoding": {
            "x": {
                "field": "activity",
                "type": "nominal",
                "title": "Activity Type",
                "sort": "-y"
            },
            "y": { "field": "count", "type": "quantitative", "title": "Number of Posts" },
            "color": { "field": "activity", "type": "nominal", "legend": null },
            "tooltip": [
                { "field": "activity", "type": "nominal", "title": "Activity" },
                { "field": "count", "type": "quantitative", "title": "Count" }
            ]
        }
    })
}

/// Point chart of individual distances by day of week.
pub fn distance_points_spec(points: &[DistancePoint]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "description": "Distances of top activities by day of week",
        "width": 600,
        "height": 400,
        "data": { "values": points },
        "mark": { "type": "point", "opacity": 0.6, "size": 50 },
        "encoding": {
            "x": day_axis(),
            "y": { "field": "distance", "type": "quantitative", "title": "Distance (miles)" },
            "color": { "field": "activity", "type": "nominal", "title": "Activity Type" },
            "tooltip": [
                { "field": "activity", "type": "nominal", "title": "Activity" },
                { "field": "dayName", "type": "ordinal", "title": "Day" },
                { "field": "distance", "type": "quantitative", "title": "Distance", "format": ".2f" }
            ]
        }
    })
}

/// Grouped bar chart of mean distance by day of week.
pub fn distance_means_spec(points: &[DistancePoint]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "description": "Mean distances of top activities by day of week",
        "width": 600,
        "height": 400,
        "data": { "values": points },
        "mark": "bar",
        "encoding": {
            "x": day_axis(),
            "y": {
                "field": "distance",
                "type": "quantitative",
                "title": "Average Distance (miles)",
                "aggregate": "mean"
            },
            "color": { "field": "activity", "type": "nominal", "title": "Activity Type" },
            "xOffset": { "field": "activity", "type": "nominal" },
            "tooltip": [
                { "field": "activity", "type": "nominal", "title": "Activity" },
                { "field": "dayName", "type": "ordinal", "title": "Day" },
                {
                    "field": "distance",
                    "type": "quantitative",
                    "title": "Avg Distance",
                    "aggregate": "mean",
                    "format": ".2f"
                }
            ]
        }
    })
}

fn day_axis() -> Value {
    json!({
        "field": "dayName",
        "type": "ordinal",
        "title": "Day of Week",
        "sort": DAY_NAMES
    })
}
