//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vibes_application::{UmbrellaAdvice, VideoRecommendation};
use vibes_domain::{ToolMetadata, WeatherReport};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationRequest {
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: String,
    pub temperature: Option<f64>,
    pub conditions: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Remaining fields of the weather result
    pub additional_info: Map<String, Value>,
}

impl WeatherResponse {
    pub fn new(location: &str, report: &WeatherReport) -> Self {
        let mut additional_info = to_object(report);
        for key in ["temperature", "weather_condition", "humidity", "wind_speed"] {
            additional_info.remove(key);
        }

        Self {
            location: location.to_string(),
            temperature: Some(report.temperature),
            conditions: Some(report.weather_condition.clone()),
            humidity: report.humidity,
            wind_speed: report.wind_speed,
            additional_info,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    pub location: String,
    /// "{conditions}, {temperature}°C"
    pub weather_summary: String,
    pub video_title: Option<String>,
    pub video_url: Option<String>,
    /// Search query, the full video list and mock flags
    pub additional_info: Map<String, Value>,
}

impl VideoResponse {
    pub fn new(location: &str, rec: &VideoRecommendation) -> Self {
        let mut additional_info = to_object(&rec.vibes);
        additional_info.remove("weather_condition");
        additional_info.remove("temperature");
        if rec.weather.mock_data {
            additional_info.insert("weather_mock_data".to_string(), Value::Bool(true));
        }

        let top = rec.top_video();
        Self {
            location: location.to_string(),
            weather_summary: rec.weather.summary(),
            video_title: top.map(|v| v.title.clone()),
            video_url: top.map(|v| v.video_url.clone()),
            additional_info,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UmbrellaResponse {
    pub location: String,
    pub needs_umbrella: bool,
    pub summary: String,
}

impl UmbrellaResponse {
    pub fn new(location: &str, advice: UmbrellaAdvice) -> Self {
        Self {
            location: location.to_string(),
            needs_umbrella: advice.needs_umbrella,
            summary: advice.summary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolMetadata>,
}

fn to_object<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
