//! Weather Vibes domain rules and value objects
//!
//! - [`search_phrase`]: maps (condition, temperature) to a music search query
//! - [`umbrella`]: decides whether an umbrella is needed
//! - [`entities`]: typed outputs of the weather and video tools

pub mod entities;
pub mod search_phrase;
pub mod umbrella;

/// Canonical names of the Weather Vibes tools
pub mod tool_names {
    pub const WEATHER_RETRIEVER: &str = "weather_retriever";
    pub const UMBRELLA_DECIDER: &str = "umbrella_decider";
    pub const YOUTUBE_WEATHER_VIBES: &str = "youtube_weather_vibes";
}

pub use entities::{VibesReport, VideoEntry, WeatherReport};
pub use search_phrase::{condition_phrase, search_query, temperature_phrase};
pub use umbrella::needs_umbrella;
