//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has defaults, so an empty file is a valid configuration.

mod server;
mod services;

pub use server::FileServerConfig;
pub use services::{
    DEFAULT_WEATHER_BASE_URL, DEFAULT_YOUTUBE_BASE_URL, FileHttpConfig, FileWeatherConfig,
    FileYoutubeConfig,
};

use serde::{Deserialize, Serialize};

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use crate::tools::youtube_weather_vibes::MAX_RESULTS_LIMIT;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Weather API settings
    pub weather: FileWeatherConfig,
    /// Video API settings
    pub youtube: FileYoutubeConfig,
    /// Outbound HTTP client settings
    pub http: FileHttpConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.port == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroPort,
                message: "server.port is 0, the OS will pick a random port".to_string(),
            });
        }

        for (field, value) in [
            ("weather.base_url", &self.weather.base_url),
            ("youtube.base_url", &self.youtube.base_url),
        ] {
            if !is_http_url(value) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidBaseUrl {
                        field: field.to_string(),
                        value: value.clone(),
                    },
                    message: format!("{}: '{}' is not an http(s) URL", field, value),
                });
            }
        }

        if !(1..=MAX_RESULTS_LIMIT).contains(&self.youtube.max_results) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "youtube.max_results".to_string(),
                    value: u64::from(self.youtube.max_results),
                    min: 1,
                    max: u64::from(MAX_RESULTS_LIMIT),
                },
                message: format!(
                    "youtube.max_results: {} is outside 1..={}",
                    self.youtube.max_results, MAX_RESULTS_LIMIT
                ),
            });
        }

        if self.http.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "http.timeout_secs".to_string(),
                    value: 0,
                    min: 1,
                    max: u64::MAX,
                },
                message: "http.timeout_secs cannot be 0".to_string(),
            });
        }

        issues
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    (value.starts_with("http://") || value.starts_with("https://"))
        && value.len() > "https://".len()
}
