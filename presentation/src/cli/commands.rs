//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for weather-vibes
#[derive(Parser, Debug)]
#[command(name = "weather-vibes")]
#[command(author, version, about = "Weather lookups, umbrella advice and music that matches the sky")]
#[command(long_about = r#"
Weather Vibes runs a small tool-using agent: it looks up the current weather
for a location, decides whether you need an umbrella, and finds videos whose
vibe matches the weather.

Without WEATHER_API_KEY / WEATHERAPI_KEY or YOUTUBE_API_KEY the tools answer
with clearly marked mock data. Keys are read from the environment or a .env file.

Configuration files are loaded from (in priority order):
1. WEATHER_VIBES_* environment variables (e.g. WEATHER_VIBES_SERVER__PORT)
2. --config <path>          Explicit config file
3. ./weather-vibes.toml     Project-level config
4. ~/.config/weather-vibes/config.toml   Global config

Example:
  weather-vibes serve --port 8080
  weather-vibes umbrella London
  weather-vibes vibes "San Francisco" --json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show the current weather for a location
    Weather {
        location: String,
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Decide whether an umbrella is needed
    Umbrella { location: String },
    /// Recommend videos matching the weather
    Vibes {
        location: String,
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// List the registered tools
    Tools {
        /// Only tools carrying all of these tags
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
}
