//! Configuration file loading for weather-vibes
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WEATHER_VIBES_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./weather-vibes.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/weather-vibes/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    DEFAULT_WEATHER_BASE_URL, DEFAULT_YOUTUBE_BASE_URL, FileConfig, FileHttpConfig,
    FileServerConfig, FileWeatherConfig, FileYoutubeConfig,
};
pub use loader::{ConfigError, ConfigLoader};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
