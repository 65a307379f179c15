//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Runkeeper post statistics.
///
/// Classifies exported Runkeeper posts and reports counts, activity
/// distances, and written commentary.
#[derive(Debug, Parser)]
#[command(name = "rk", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the posts file (JSON array or JSON Lines).
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show post counts, categories, and date range.
    About {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show activity types and distances of completed events.
    Activities {
        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Number of top activities to analyze.
        #[arg(long)]
        top: Option<usize>,
    },

    /// List posts with written commentary.
    Descriptions {
        /// Only show posts whose text or commentary contains this.
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List every post with its derived fields.
    Posts {
        /// Show at most this many posts.
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print a Vega-Lite chart spec.
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,

        /// Number of top activities to chart.
        #[arg(long)]
        top: Option<usize>,
    },

    /// Classify post text given on the command line.
    Classify {
        /// Post text, one post per argument.
        #[arg(required = true)]
        text: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Posts per activity type.
    ActivityCounts,
    /// Individual distances by day of week.
    Distances,
    /// Mean distance by day of week.
    DistanceMeans,
}
