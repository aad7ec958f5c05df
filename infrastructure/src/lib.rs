//! Infrastructure layer for weather-vibes
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the concrete tools, credential loading,
//! configuration file loading, and the agent factory.

pub mod config;
pub mod credentials;
pub mod factory;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileHttpConfig, FileServerConfig,
    FileWeatherConfig, FileYoutubeConfig, Severity,
};
pub use credentials::{Credentials, load_dotenv};
pub use factory::WeatherVibesAgentFactory;
pub use tools::{UmbrellaDeciderTool, WeatherRetrieverTool, YoutubeWeatherVibesTool};
