//! Weather Vibes value objects
//!
//! These are the typed shapes of the tool outputs. Tools serialize them into
//! JSON for the agent state; pipelines parse them back when they need fields.

use serde::{Deserialize, Serialize};

/// Current weather for a location (`weather_retriever` output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub weather_condition: String,
    /// Percent
    pub precipitation_chance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// True when the report is synthetic because no credential was configured
    #[serde(default)]
    pub mock_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_api_keys: Option<String>,
}

impl WeatherReport {
    /// Synthetic report used when no weather credential is available
    pub fn mock(location: impl Into<String>, missing_api_keys: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            temperature: 22.5,
            weather_condition: "[MOCK DATA] Partly cloudy".to_string(),
            precipitation_chance: 20.0,
            humidity: None,
            wind_speed: None,
            mock_data: true,
            missing_api_keys: Some(missing_api_keys.into()),
        }
    }

    /// Short human summary, e.g. "Partly cloudy, 22.5°C"
    pub fn summary(&self) -> String {
        format!("{}, {}°C", self.weather_condition, self.temperature)
    }
}

/// A single video matched to the weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub title: String,
    pub channel_title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_id: String,
    pub video_url: String,
}

impl VideoEntry {
    pub fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }
}

/// Videos matching the vibe of the weather (`youtube_weather_vibes` output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibesReport {
    pub weather_condition: String,
    pub temperature: f64,
    pub search_query: String,
    pub videos: Vec<VideoEntry>,
    #[serde(default)]
    pub mock_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_api_key: Option<String>,
}

impl VibesReport {
    pub fn top_video(&self) -> Option<&VideoEntry> {
        self.videos.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_report_is_flagged() {
        let report = WeatherReport::mock("Paris", "WEATHER_API_KEY");
        assert!(report.mock_data);
        assert_eq!(report.location, "Paris");
        assert!(report.weather_condition.starts_with("[MOCK DATA]"));
    }

    #[test]
    fn test_report_parses_minimal_json() {
        let report: WeatherReport = serde_json::from_value(json!({
            "location": "Paris",
            "temperature": 22.5,
            "weather_condition": "Partly cloudy",
            "precipitation_chance": 20.0
        }))
        .unwrap();

        assert!(!report.mock_data);
        assert!(report.humidity.is_none());
        assert_eq!(report.summary(), "Partly cloudy, 22.5°C");
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let value = serde_json::to_value(WeatherReport {
            location: "Oslo".into(),
            temperature: -3.0,
            weather_condition: "Snow".into(),
            precipitation_chance: 80.0,
            humidity: None,
            wind_speed: Some(14.4),
            mock_data: false,
            missing_api_keys: None,
        })
        .unwrap();

        assert!(value.get("humidity").is_none());
        assert!(value.get("missing_api_keys").is_none());
        assert_eq!(value["wind_speed"], 14.4);
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            VideoEntry::watch_url("abc123"),
            "https://www.youtube.com/watch?v=abc123"
        );
    }
}
