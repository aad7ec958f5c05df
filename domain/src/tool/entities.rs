//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};

/// Example invocation documented alongside a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolExample {
    pub input: Value,
    pub output: Value,
}

/// Declarative descriptor of a tool, used for registration and discovery.
///
/// Metadata is produced once per tool type by [`Tool::metadata`](super::Tool::metadata)
/// and never mutated afterwards. The schemas are documentation for callers;
/// tools still validate their own inputs at execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolMetadata {
    /// Unique name within a registry (e.g., "weather_retriever")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Discovery tags (unordered)
    pub tags: BTreeSet<String>,
    /// JSON schema of accepted inputs
    pub input_schema: Value,
    /// JSON schema of produced output
    pub output_schema: Value,
    /// Optional documented examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ToolExample>,
}

impl ToolMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: BTreeSet::new(),
            input_schema: empty_object_schema(),
            output_schema: empty_object_schema(),
            examples: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.output_schema = schema;
        self
    }

    pub fn with_example(mut self, input: Value, output: Value) -> Self {
        self.examples.push(ToolExample { input, output });
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// True when every tag in `tags` is present on this tool.
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.has_tag(t.as_ref()))
    }

    /// Names listed under `required` in the input schema.
    pub fn required_inputs(&self) -> Vec<&str> {
        self.input_schema["required"]
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

/// A call to a tool with named arguments.
///
/// Arguments are looked up by name; keys the tool does not know are ignored.
/// A key bound to JSON `null` is treated the same as a missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, Value>,
    /// Optional note on why the orchestrator issued this call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
            reasoning: None,
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    /// Get a raw argument, treating `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key).filter(|v| !v.is_null())
    }

    /// Get a string argument
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get a required string argument or the name of the missing key
    pub fn require_str(&self, key: &str) -> Result<&str, String> {
        self.get_str(key).ok_or_else(|| key.to_string())
    }

    /// Get a numeric argument (integers are widened)
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Get a required numeric argument or the name of the missing key
    pub fn require_f64(&self, key: &str) -> Result<f64, String> {
        self.get_f64(key).ok_or_else(|| key.to_string())
    }

    /// Get an optional bool argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Get a nested object argument
    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Arguments as a JSON object, for logging and execution records
    pub fn arguments_json(&self) -> Value {
        Value::Object(
            self.arguments
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_builder() {
        let meta = ToolMetadata::new("weather_retriever", "Get weather")
            .with_tags(["weather", "location"])
            .with_input_schema(json!({
                "type": "object",
                "properties": { "location": { "type": "string" } },
                "required": ["location"]
            }));

        assert_eq!(meta.name, "weather_retriever");
        assert!(meta.has_tag("weather"));
        assert!(meta.has_all_tags(&["location", "weather"]));
        assert!(!meta.has_all_tags(&["weather", "youtube"]));
        assert_eq!(meta.required_inputs(), vec!["location"]);
    }

    #[test]
    fn test_tags_are_a_set() {
        let meta = ToolMetadata::new("t", "d")
            .with_tag("b")
            .with_tag("a")
            .with_tag("b");
        assert_eq!(meta.tags.len(), 2);
    }

    #[test]
    fn test_metadata_without_required_inputs() {
        let meta = ToolMetadata::new("noop", "Does nothing");
        assert!(meta.required_inputs().is_empty());
    }

    #[test]
    fn test_tool_call_accessors() {
        let call = ToolCall::new("youtube_weather_vibes")
            .with_arg("weather_condition", "Clear")
            .with_arg("temperature", 25)
            .with_arg("weather_data", json!({ "temperature": 3.5 }))
            .with_reasoning("match the weather");

        assert_eq!(call.get_str("weather_condition"), Some("Clear"));
        assert_eq!(call.get_f64("temperature"), Some(25.0));
        assert!(call.get_object("weather_data").is_some());
        assert_eq!(call.require_str("missing"), Err("missing".to_string()));
        assert!(call.require_f64("weather_condition").is_err());
    }

    #[test]
    fn test_null_argument_is_absent() {
        let call = ToolCall::new("t").with_arg("location", Value::Null);
        assert!(call.get("location").is_none());
        assert!(call.require_str("location").is_err());
    }
}
