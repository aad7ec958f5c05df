//! youtube_weather_vibes tool: videos that match the weather
//!
//! `weather_condition` and `temperature` are resolved per field from, in
//! order: direct arguments, the `weather_data` object (a weather_retriever
//! result), and the generic `input_data` object.

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};
use vibes_domain::weather::tool_names::YOUTUBE_WEATHER_VIBES;
use vibes_domain::{
    InputSource, Tool, ToolCall, ToolError, ToolMetadata, VibesReport, VideoEntry, resolve_fields,
    search_query,
};

use super::{read_error_body, to_value};
use crate::credentials::{Credentials, YOUTUBE_API_KEY};

const SERVICE: &str = "YouTube API";
const REQUIRED_FIELDS: [&str; 2] = ["weather_condition", "temperature"];

/// Most videos a single recommendation asks for
pub const MAX_RESULTS_LIMIT: u32 = 5;

pub struct YoutubeWeatherVibesTool {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_results: u32,
}

impl YoutubeWeatherVibesTool {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        max_results: u32,
        credentials: &Credentials,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: credentials.youtube_key().map(str::to_string),
            max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    async fn search(&self, api_key: &str, query: &str) -> Result<Vec<VideoEntry>, ToolError> {
        let max_results = self.max_results.to_string();
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("key", api_key),
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("videoEmbeddable", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                ToolError::execution_failed(YOUTUBE_WEATHER_VIBES, format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(ToolError::external_service(SERVICE, status.as_u16(), body));
        }

        let body: Value = response.json().await.map_err(|e| {
            ToolError::execution_failed(
                YOUTUBE_WEATHER_VIBES,
                format!("Invalid response body: {}", e),
            )
        })?;
        Ok(parse_search_results(&body))
    }
}

#[async_trait]
impl Tool for YoutubeWeatherVibesTool {
    fn metadata() -> ToolMetadata {
        ToolMetadata::new(
            YOUTUBE_WEATHER_VIBES,
            "Finds YouTube videos that match the vibe of the current weather",
        )
        .with_tags(["weather", "youtube", "vibes", "entertainment"])
        .with_input_schema(json!({
            "type": "object",
            "properties": {
                "weather_condition": {"type": "string"},
                "temperature": {"type": "number", "description": "Degrees Celsius"},
                "weather_data": {
                    "type": "object",
                    "description": "Output of weather_retriever"
                },
                "input_data": {
                    "type": "object",
                    "description": "Generic mapping holding weather_condition and temperature"
                }
            }
        }))
        .with_output_schema(json!({
            "type": "object",
            "properties": {
                "weather_condition": {"type": "string"},
                "temperature": {"type": "number"},
                "search_query": {"type": "string"},
                "videos": {"type": "array"},
                "mock_data": {"type": "boolean"}
            },
            "required": ["weather_condition", "temperature", "search_query", "videos"]
        }))
        .with_example(
            json!({"weather_condition": "Clear", "temperature": 25}),
            json!({"search_query": "sunny day upbeat warm summer music playlist"}),
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let direct: Map<String, Value> = REQUIRED_FIELDS
            .iter()
            .filter_map(|&f| call.get(f).map(|v| (f.to_string(), v.clone())))
            .collect();

        let resolved = resolve_fields(
            YOUTUBE_WEATHER_VIBES,
            &REQUIRED_FIELDS,
            &[
                InputSource::new("arguments", &direct),
                InputSource::from_call(call, "weather_data"),
                InputSource::from_call(call, "input_data"),
            ],
        )?;

        let condition = resolved["weather_condition"]
            .as_str()
            .ok_or_else(|| {
                ToolError::invalid_input(YOUTUBE_WEATHER_VIBES, "weather_condition must be a string")
            })?
            .to_string();
        let temperature = resolved["temperature"].as_f64().ok_or_else(|| {
            ToolError::invalid_input(YOUTUBE_WEATHER_VIBES, "temperature must be a number")
        })?;

        let query = search_query(&condition, temperature);

        let report = match self.api_key.as_deref() {
            Some(key) => {
                debug!("Searching videos for {:?}", query);
                let videos = self.search(key, &query).await?;
                VibesReport {
                    weather_condition: condition,
                    temperature,
                    search_query: query,
                    videos,
                    mock_data: false,
                    missing_api_key: None,
                }
            }
            None => {
                warn!("{} is not set - using mock video data", YOUTUBE_API_KEY);
                VibesReport {
                    videos: mock_videos(&condition, temperature),
                    weather_condition: condition,
                    temperature,
                    search_query: query,
                    mock_data: true,
                    missing_api_key: Some(YOUTUBE_API_KEY.to_string()),
                }
            }
        };

        to_value(YOUTUBE_WEATHER_VIBES, &report)
    }
}

/// Keep search items that carry a video id
pub(crate) fn parse_search_results(body: &Value) -> Vec<VideoEntry> {
    let Some(items) = body.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let video_id = item.pointer("/id/videoId").and_then(Value::as_str)?;
            let text = |path: &str| {
                item.pointer(path)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            Some(VideoEntry {
                title: text("/snippet/title"),
                channel_title: text("/snippet/channelTitle"),
                description: text("/snippet/description"),
                thumbnail_url: text("/snippet/thumbnails/high/url"),
                video_id: video_id.to_string(),
                video_url: VideoEntry::watch_url(video_id),
            })
        })
        .collect()
}

fn mock_video(n: u8, title: String, channel: &str, description: String) -> VideoEntry {
    let video_id = format!("mock_id_{}", n);
    VideoEntry {
        title,
        channel_title: channel.to_string(),
        description,
        thumbnail_url: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id),
        video_url: VideoEntry::watch_url(&video_id),
        video_id,
    }
}

fn mock_videos(condition: &str, temperature: f64) -> Vec<VideoEntry> {
    const NOTE: &str = "[MOCK DATA - YOUTUBE_API_KEY missing]";
    vec![
        mock_video(
            1,
            format!("[MOCK DATA] Relaxing {condition} Day Music Mix | {temperature}°C Vibes"),
            "Weather Vibes Music",
            format!(
                "{NOTE} The perfect playlist for a {condition} day with temperatures around {temperature}°C. Enjoy these carefully selected tracks to match your weather mood."
            ),
        ),
        mock_video(
            2,
            format!("[MOCK DATA] Study/Work Music for {condition} Weather | Ambient Focus Playlist"),
            "Focus Flow",
            format!(
                "{NOTE} Boost your productivity during {condition} weather with this ambient music mix designed for focus and concentration."
            ),
        ),
        mock_video(
            3,
            format!("[MOCK DATA] {temperature}°C Weather Beats | Lofi Hip Hop Mix"),
            "Chill Beats Studio",
            format!(
                "{NOTE} Lofi hip hop beats perfect for relaxing, studying, or working while enjoying the current weather conditions."
            ),
        ),
        mock_video(
            4,
            format!("[MOCK DATA] Epic {condition} Soundtrack | Cinematic Music Collection"),
            "Epic Music World",
            format!(
                "{NOTE} Experience the majesty of {condition} weather with this epic cinematic soundtrack collection."
            ),
        ),
        mock_video(
            5,
            format!("[MOCK DATA] Acoustic Covers for {condition} Days | Relaxing Playlist"),
            "Acoustic Treasures",
            format!(
                "{NOTE} Beautiful acoustic covers of popular songs that perfectly match the mood of today's weather."
            ),
        ),
    ]
}
