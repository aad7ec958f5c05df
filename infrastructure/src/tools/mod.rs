//! Tool implementations for the Weather Vibes agent
//!
//! - `weather_retriever`: current weather over HTTP (WeatherAPI)
//! - `youtube_weather_vibes`: videos matching the weather (YouTube Data API)
//! - `umbrella_decider`: pure decision from a weather result
//!
//! The HTTP tools share one `reqwest::Client` and fall back to mock data
//! when their credential is missing.

pub mod umbrella_decider;
pub mod weather_retriever;
pub mod youtube_weather_vibes;

pub use umbrella_decider::UmbrellaDeciderTool;
pub use weather_retriever::WeatherRetrieverTool;
pub use youtube_weather_vibes::YoutubeWeatherVibesTool;

use serde::Serialize;
use serde_json::Value;
use vibes_domain::ToolError;
use vibes_domain::util::truncate_str;

/// Upper bound on the error body kept in `ToolError::ExternalService`
const MAX_ERROR_BODY: usize = 2 * 1024;

/// Read a failed response body for error reporting
async fn read_error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(text) => truncate_str(&text, MAX_ERROR_BODY).to_string(),
        Err(e) => format!("<unreadable body: {}>", e),
    }
}

fn to_value<T: Serialize>(tool: &str, output: &T) -> Result<Value, ToolError> {
    serde_json::to_value(output).map_err(|e| ToolError::execution_failed(tool, e.to_string()))
}
