//! Check Umbrella use case.
//!
//! weather_retriever -> umbrella_decider -> summary. The summary is built by
//! [`format_umbrella_summary`] from the agent state alone, so it can be
//! reproduced from a stored state without re-running any tool.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use vibes_domain::weather::tool_names;
use vibes_domain::{AgentState, ToolCall};

use crate::agent::{Agent, AgentError, Pipeline};
use crate::use_cases::shared::{retrieve_weather, validate_location};

/// Result of [`UmbrellaPipeline`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UmbrellaAdvice {
    pub needs_umbrella: bool,
    pub summary: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UmbrellaPipeline;

#[async_trait]
impl Pipeline for UmbrellaPipeline {
    type Output = UmbrellaAdvice;

    fn name(&self) -> &'static str {
        "umbrella"
    }

    async fn execute(&self, agent: &mut Agent, task: &str) -> Result<UmbrellaAdvice, AgentError> {
        let location = validate_location(task)?;
        let weather = retrieve_weather(agent, location).await?;

        agent
            .call_tool(
                ToolCall::new(tool_names::UMBRELLA_DECIDER)
                    .with_arg("weather_data", weather)
                    .with_reasoning("Decide whether an umbrella is needed"),
            )
            .await?;

        let needs_umbrella = decision(agent.state())?;
        let summary = format_umbrella_summary(agent.state())?;
        info!("Umbrella advice for {}: {}", location, needs_umbrella);

        Ok(UmbrellaAdvice {
            needs_umbrella,
            summary,
        })
    }
}

/// Render the umbrella answer from the stored weather and decision results.
///
/// Missing weather fields print as `N/A`; a missing weather or decision
/// result is an error.
pub fn format_umbrella_summary(state: &AgentState) -> Result<String, AgentError> {
    let weather = state
        .get_tool_result(tool_names::WEATHER_RETRIEVER)
        .ok_or_else(|| AgentError::MissingState(tool_names::WEATHER_RETRIEVER.to_string()))?;
    let needed = decision(state)?;

    let mut out = String::from(if needed {
        "You need an umbrella today!"
    } else {
        "No umbrella needed today!"
    });
    out.push_str(&format!(
        "\n\nWeather details for {}:",
        field(weather, "location")
    ));
    out.push_str(&format!(
        "\n- Temperature: {}°C",
        field(weather, "temperature")
    ));
    out.push_str(&format!(
        "\n- Condition: {}",
        field(weather, "weather_condition")
    ));
    out.push_str(&format!(
        "\n- Chance of rain: {}%",
        field(weather, "precipitation_chance")
    ));
    Ok(out)
}

/// Stored decision: a bare bool or `{"needs_umbrella": bool}`
fn decision(state: &AgentState) -> Result<bool, AgentError> {
    let value = state
        .get_tool_result(tool_names::UMBRELLA_DECIDER)
        .ok_or_else(|| AgentError::MissingState(tool_names::UMBRELLA_DECIDER.to_string()))?;

    value
        .as_bool()
        .or_else(|| value.get("needs_umbrella").and_then(Value::as_bool))
        .ok_or_else(|| {
            AgentError::invalid_result(tool_names::UMBRELLA_DECIDER, format!("expected a boolean, got {}", value))
        })
}

fn field(weather: &Value, key: &str) -> String {
    match weather.get(key) {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{StubTool, paris_weather, register_stub, weather_agent};
    use serde_json::json;
    use vibes_domain::{TaskStatus, ToolError};

    #[tokio::test]
    async fn test_paris_needs_umbrella() {
        let (mut agent, _) = weather_agent(StubTool::ok(paris_weather()));
        let decider = register_stub(&mut agent, tool_names::UMBRELLA_DECIDER, StubTool::ok(json!(true)));

        let advice = agent.run(&UmbrellaPipeline, "Paris").await.unwrap();

        assert!(advice.needs_umbrella);
        for expected in ["You need an umbrella today!", "Paris", "22.5", "Partly cloudy", "20"] {
            assert!(
                advice.summary.contains(expected),
                "missing {:?} in {:?}",
                expected,
                advice.summary
            );
        }
        // decider receives the stored weather result
        assert_eq!(decider.last_args()["weather_data"], paris_weather());
    }

    #[tokio::test]
    async fn test_no_umbrella_message() {
        let (mut agent, _) = weather_agent(StubTool::ok(paris_weather()));
        register_stub(
            &mut agent,
            tool_names::UMBRELLA_DECIDER,
            StubTool::ok(json!({"needs_umbrella": false})),
        );

        let advice = agent.run(&UmbrellaPipeline, "Paris").await.unwrap();

        assert!(!advice.needs_umbrella);
        assert!(advice.summary.starts_with("No umbrella needed today!"));
    }

    #[tokio::test]
    async fn test_weather_failure_aborts_pipeline() {
        let (mut agent, _) = weather_agent(StubTool::failing(ToolError::execution_failed(
            tool_names::WEATHER_RETRIEVER,
            "connection refused",
        )));
        let decider = register_stub(&mut agent, tool_names::UMBRELLA_DECIDER, StubTool::ok(json!(true)));

        let err = agent.run(&UmbrellaPipeline, "Paris").await.unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(decider.call_count(), 0);
        assert!(agent.state().is_empty());
        let task = agent.last_task().unwrap();
        assert_eq!(task.status, TaskStatus::Failed);
        assert_eq!(task.called_tools(), vec![tool_names::WEATHER_RETRIEVER]);
    }

    #[tokio::test]
    async fn test_decider_failure_keeps_partial_state() {
        let (mut agent, _) = weather_agent(StubTool::ok(paris_weather()));
        register_stub(
            &mut agent,
            tool_names::UMBRELLA_DECIDER,
            StubTool::failing(ToolError::missing_input(tool_names::UMBRELLA_DECIDER, ["weather_data"])),
        );

        let err = agent.run(&UmbrellaPipeline, "Paris").await.unwrap_err();

        assert_eq!(err.tool_error().unwrap().missing_fields(), ["weather_data"]);
        assert!(agent.state().has_result(tool_names::WEATHER_RETRIEVER));
        assert!(!agent.state().has_result(tool_names::UMBRELLA_DECIDER));
    }

    #[test]
    fn test_summary_from_state_alone() {
        let mut state = AgentState::new();
        state.set_tool_result(tool_names::WEATHER_RETRIEVER, json!({"location": "Oslo"}));
        state.set_tool_result(tool_names::UMBRELLA_DECIDER, json!(false));

        let summary = format_umbrella_summary(&state).unwrap();

        assert_eq!(
            summary,
            "No umbrella needed today!\n\nWeather details for Oslo:\n- Temperature: N/A°C\n- Condition: N/A\n- Chance of rain: N/A%"
        );
    }

    #[test]
    fn test_summary_requires_decision() {
        let mut state = AgentState::new();
        state.set_tool_result(tool_names::WEATHER_RETRIEVER, paris_weather());

        let err = format_umbrella_summary(&state).unwrap_err();
        assert!(matches!(err, AgentError::MissingState(name) if name == tool_names::UMBRELLA_DECIDER));
    }

    #[test]
    fn test_non_boolean_decision_rejected() {
        let mut state = AgentState::new();
        state.set_tool_result(tool_names::WEATHER_RETRIEVER, paris_weather());
        state.set_tool_result(tool_names::UMBRELLA_DECIDER, json!("yes"));

        assert!(matches!(
            format_umbrella_summary(&state),
            Err(AgentError::InvalidResult { .. })
        ));
    }
}
