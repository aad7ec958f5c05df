//! weather_retriever tool: current conditions from WeatherAPI
//!
//! Without a weather key the tool answers with a synthetic report flagged
//! `mock_data: true` so the pipelines keep working offline.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};
use vibes_domain::weather::tool_names::WEATHER_RETRIEVER;
use vibes_domain::{Tool, ToolCall, ToolError, ToolMetadata, WeatherReport};

use super::{read_error_body, to_value};
use crate::credentials::Credentials;

const SERVICE: &str = "WeatherAPI";

pub struct WeatherRetrieverTool {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    /// Reported in mock results when no key is configured
    missing_keys: String,
}

impl WeatherRetrieverTool {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, credentials: &Credentials) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: credentials.weather_key().map(str::to_string),
            missing_keys: credentials.missing_weather_keys(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/current.json", self.base_url.trim_end_matches('/'))
    }

    async fn fetch(&self, api_key: &str, location: &str) -> Result<WeatherReport, ToolError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("key", api_key), ("q", location), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| {
                ToolError::execution_failed(WEATHER_RETRIEVER, format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(ToolError::external_service(SERVICE, status.as_u16(), body));
        }

        let body: Value = response.json().await.map_err(|e| {
            ToolError::execution_failed(WEATHER_RETRIEVER, format!("Invalid response body: {}", e))
        })?;
        parse_current(&body)
    }
}

#[async_trait]
impl Tool for WeatherRetrieverTool {
    fn metadata() -> ToolMetadata {
        ToolMetadata::new(
            WEATHER_RETRIEVER,
            "Retrieves current weather data for a given location",
        )
        .with_tags(["weather", "location"])
        .with_input_schema(json!({
            "type": "object",
            "properties": {
                "location": {"type": "string", "description": "City name or coordinates"}
            },
            "required": ["location"]
        }))
        .with_output_schema(json!({
            "type": "object",
            "properties": {
                "location": {"type": "string"},
                "temperature": {"type": "number", "description": "Degrees Celsius"},
                "weather_condition": {"type": "string"},
                "precipitation_chance": {"type": "number", "description": "Percent"},
                "humidity": {"type": "number"},
                "wind_speed": {"type": "number", "description": "km/h"},
                "mock_data": {"type": "boolean"}
            },
            "required": ["location", "temperature", "weather_condition", "precipitation_chance"]
        }))
        .with_example(
            json!({"location": "Paris"}),
            json!({
                "location": "Paris",
                "temperature": 22.5,
                "weather_condition": "Partly cloudy",
                "precipitation_chance": 20.0
            }),
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let location = call
            .require_str("location")
            .map_err(|field| ToolError::missing_input(WEATHER_RETRIEVER, [field]))?;

        let report = match self.api_key.as_deref() {
            Some(key) => {
                debug!("Fetching weather for {}", location);
                self.fetch(key, location).await?
            }
            None => {
                warn!(
                    "Missing API key(s): {}. Using mock weather data for location: {}",
                    self.missing_keys, location
                );
                WeatherReport::mock(location, self.missing_keys.as_str())
            }
        };

        to_value(WEATHER_RETRIEVER, &report)
    }
}

#[derive(Deserialize)]
struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
    #[serde(default)]
    precip_mm: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
    #[serde(default)]
    wind_kph: Option<f64>,
}

#[derive(Deserialize)]
struct ApiCondition {
    text: String,
}

/// Map a `current.json` body to a report.
///
/// `precip_mm` defaults to 0 and is scaled by 100 into a percentage.
pub(crate) fn parse_current(body: &Value) -> Result<WeatherReport, ToolError> {
    let parsed = CurrentResponse::deserialize(body).map_err(|e| {
        ToolError::execution_failed(WEATHER_RETRIEVER, format!("Unexpected response shape: {}", e))
    })?;

    Ok(WeatherReport {
        location: parsed.location.name,
        temperature: parsed.current.temp_c,
        weather_condition: parsed.current.condition.text,
        precipitation_chance: parsed.current.precip_mm.unwrap_or(0.0) * 100.0,
        humidity: parsed.current.humidity,
        wind_speed: parsed.current.wind_kph,
        mock_data: false,
        missing_api_keys: None,
    })
}
