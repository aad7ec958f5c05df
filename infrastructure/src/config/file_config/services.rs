//! External service configuration (`[weather]`, `[youtube]`, `[http]` sections)

use serde::{Deserialize, Serialize};

pub const DEFAULT_WEATHER_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// WeatherAPI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWeatherConfig {
    /// Base URL; `/current.json` is appended
    pub base_url: String,
}

impl Default for FileWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
        }
    }
}

/// YouTube Data API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileYoutubeConfig {
    /// Base URL; `/search` is appended
    pub base_url: String,
    /// Videos requested per search (1..=5)
    pub max_results: u32,
}

impl Default for FileYoutubeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YOUTUBE_BASE_URL.to_string(),
            max_results: 5,
        }
    }
}

/// Outbound HTTP client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    pub timeout_secs: u64,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}
