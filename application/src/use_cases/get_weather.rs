//! Get Weather use case.
//!
//! Single-step pipeline backing `/weather`: retrieve the current weather for
//! a location and return it as a typed [`WeatherReport`].

use async_trait::async_trait;
use tracing::info;
use vibes_domain::WeatherReport;
use vibes_domain::weather::tool_names;

use crate::agent::{Agent, AgentError, Pipeline};
use crate::use_cases::shared::{retrieve_weather, stored_result, validate_location};

#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherPipeline;

#[async_trait]
impl Pipeline for WeatherPipeline {
    type Output = WeatherReport;

    fn name(&self) -> &'static str {
        "weather"
    }

    async fn execute(&self, agent: &mut Agent, task: &str) -> Result<WeatherReport, AgentError> {
        let location = validate_location(task)?;
        retrieve_weather(agent, location).await?;

        let report: WeatherReport = stored_result(agent, tool_names::WEATHER_RETRIEVER)?;
        info!("Weather for {}: {}", report.location, report.summary());
        Ok(report)
    }
}
