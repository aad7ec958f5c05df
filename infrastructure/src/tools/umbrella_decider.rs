//! umbrella_decider tool: needs-an-umbrella decision from a weather result

use async_trait::async_trait;
use serde_json::{Value, json};
use vibes_domain::weather::tool_names::UMBRELLA_DECIDER;
use vibes_domain::{Tool, ToolCall, ToolError, ToolMetadata, needs_umbrella};

#[derive(Debug, Default, Clone, Copy)]
pub struct UmbrellaDeciderTool;

#[async_trait]
impl Tool for UmbrellaDeciderTool {
    fn metadata() -> ToolMetadata {
        ToolMetadata::new(
            UMBRELLA_DECIDER,
            "Decides if an umbrella is needed based on weather data",
        )
        .with_tags(["decision", "weather-analysis"])
        .with_input_schema(json!({
            "type": "object",
            "properties": {
                "weather_data": {
                    "type": "object",
                    "description": "Output of weather_retriever"
                }
            },
            "required": ["weather_data"]
        }))
        .with_output_schema(json!({
            "type": "boolean",
            "description": "True if umbrella is needed, False otherwise"
        }))
        .with_example(
            json!({"weather_data": {"precipitation_chance": 60.0, "weather_condition": "Light rain"}}),
            json!(true),
        )
    }

    /// Missing precipitation counts as 0 and a missing condition as empty.
    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let weather = call
            .get_object("weather_data")
            .ok_or_else(|| ToolError::missing_input(UMBRELLA_DECIDER, ["weather_data"]))?;

        let chance = weather
            .get("precipitation_chance")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        let condition = weather
            .get("weather_condition")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Value::Bool(needs_umbrella(chance, condition)))
    }
}
