//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// US locale date format, e.g. `9/29/2018`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the exported posts file.
    pub data_path: PathBuf,

    /// How many of the most common activities to analyze.
    pub top_activities: usize,

    /// `strftime` format for displayed dates.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_path: data_dir.join("saved_tweets.json"),
            top_activities: 3,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (RK_*)
        figment = figment.merge(Env::prefixed("RK_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for rk.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("rk"))
}

/// Returns the platform-specific data directory for rk.
///
/// On Linux: `~/.local/share/rk`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("rk"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_dirs_data_path_ends_with_rk() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "rk");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_posts() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.data_path, data_dir.join("saved_tweets.json"));
        assert_eq!(config.top_activities, 3);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_path = \"/tmp/posts.json\"\ntop_activities = 5").unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/tmp/posts.json"));
        assert_eq!(config.top_activities, 5);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_debug_shows_every_field() {
        let config = Config {
            data_path: PathBuf::from("/tmp/posts.json"),
            top_activities: 4,
            date_format: "%Y".to_string(),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("data_path: \"/tmp/posts.json\""), "{debug}");
        assert!(debug.contains("top_activities: 4"), "{debug}");
        assert!(debug.contains("date_format: \"%Y\""), "{debug}");
    }
}
