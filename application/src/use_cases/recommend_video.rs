//! Recommend Video use case.
//!
//! weather_retriever -> youtube_weather_vibes. The video tool receives the
//! whole weather result as `weather_data` and resolves its own fields from it.

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use vibes_domain::weather::tool_names;
use vibes_domain::{ToolCall, VibesReport, VideoEntry, WeatherReport};

use crate::agent::{Agent, AgentError, Pipeline};
use crate::use_cases::shared::{retrieve_weather, stored_result, validate_location};

/// Result of [`RecommendVideoPipeline`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecommendation {
    pub weather: WeatherReport,
    pub vibes: VibesReport,
}

impl VideoRecommendation {
    pub fn top_video(&self) -> Option<&VideoEntry> {
        self.vibes.top_video()
    }

    /// True when either step fell back to synthetic data
    pub fn is_mock(&self) -> bool {
        self.weather.mock_data || self.vibes.mock_data
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendVideoPipeline;

#[async_trait]
impl Pipeline for RecommendVideoPipeline {
    type Output = VideoRecommendation;

    fn name(&self) -> &'static str {
        "recommend_video"
    }

    async fn execute(
        &self,
        agent: &mut Agent,
        task: &str,
    ) -> Result<VideoRecommendation, AgentError> {
        let location = validate_location(task)?;
        let weather = retrieve_weather(agent, location).await?;

        agent
            .call_tool(
                ToolCall::new(tool_names::YOUTUBE_WEATHER_VIBES)
                    .with_arg("weather_data", weather)
                    .with_reasoning("Find videos matching the weather"),
            )
            .await?;

        let weather: WeatherReport = stored_result(agent, tool_names::WEATHER_RETRIEVER)?;
        let vibes: VibesReport = stored_result(agent, tool_names::YOUTUBE_WEATHER_VIBES)?;
        info!(
            "Found {} video(s) for {} using {:?}",
            vibes.videos.len(),
            weather.location,
            vibes.search_query
        );

        Ok(VideoRecommendation { weather, vibes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{StubTool, paris_weather, register_stub, weather_agent};
    use serde_json::json;
    use vibes_domain::ToolError;

    fn vibes_result() -> serde_json::Value {
        json!({
            "weather_condition": "Partly cloudy",
            "temperature": 22.5,
            "search_query": "cloudy day chill warm summer music playlist",
            "videos": [{
                "title": "Cloudy Day Mix",
                "channel_title": "Chill Channel",
                "description": "",
                "thumbnail_url": "https://i.ytimg.com/vi/abc/hqdefault.jpg",
                "video_id": "abc",
                "video_url": "https://www.youtube.com/watch?v=abc"
            }]
        })
    }

    #[tokio::test]
    async fn test_recommendation_combines_both_results() {
        let (mut agent, _) = weather_agent(StubTool::ok(paris_weather()));
        let vibes = register_stub(
            &mut agent,
            tool_names::YOUTUBE_WEATHER_VIBES,
            StubTool::ok(vibes_result()),
        );

        let rec = agent.run(&RecommendVideoPipeline, "Paris").await.unwrap();

        assert_eq!(rec.weather.location, "Paris");
        assert_eq!(rec.top_video().unwrap().video_id, "abc");
        assert!(!rec.is_mock());
        assert_eq!(vibes.last_args()["weather_data"], paris_weather());
        assert_eq!(
            agent.last_task().unwrap().called_tools(),
            vec![tool_names::WEATHER_RETRIEVER, tool_names::YOUTUBE_WEATHER_VIBES]
        );
    }

    #[tokio::test]
    async fn test_video_failure_is_reported() {
        let (mut agent, _) = weather_agent(StubTool::ok(paris_weather()));
        register_stub(
            &mut agent,
            tool_names::YOUTUBE_WEATHER_VIBES,
            StubTool::failing(ToolError::external_service("YouTube API", 403, "quotaExceeded")),
        );

        let err = agent.run(&RecommendVideoPipeline, "Paris").await.unwrap_err();

        assert!(err.to_string().starts_with("youtube_weather_vibes: "));
        assert!(err.to_string().contains("quotaExceeded"));
    }

    #[tokio::test]
    async fn test_unregistered_video_tool() {
        let (mut agent, _) = weather_agent(StubTool::ok(paris_weather()));

        let err = agent.run(&RecommendVideoPipeline, "Paris").await.unwrap_err();

        assert!(matches!(err, AgentError::Registry(_)));
    }
}
