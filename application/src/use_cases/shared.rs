//! Shared helpers for the pipelines.

use serde::de::DeserializeOwned;
use serde_json::Value;
use vibes_domain::ToolCall;
use vibes_domain::weather::tool_names;

use crate::agent::{Agent, AgentError};

/// Trim the location and reject an empty one.
pub(crate) fn validate_location(task: &str) -> Result<&str, AgentError> {
    let location = task.trim();
    if location.is_empty() {
        return Err(AgentError::InvalidTask("Location must not be empty".to_string()));
    }
    Ok(location)
}

/// Deserialize the stored result of `tool` into `T`.
pub(crate) fn stored_result<T: DeserializeOwned>(agent: &Agent, tool: &str) -> Result<T, AgentError> {
    let value = agent.require_result(tool)?;
    serde_json::from_value(value.clone())
        .map_err(|e| AgentError::invalid_result(tool, e.to_string()))
}

/// First step of every pipeline: fetch the weather for `location`.
pub(crate) async fn retrieve_weather(agent: &mut Agent, location: &str) -> Result<Value, AgentError> {
    agent
        .call_tool(
            ToolCall::new(tool_names::WEATHER_RETRIEVER)
                .with_arg("location", location)
                .with_reasoning(format!("Get current weather for {}", location)),
        )
        .await
}
