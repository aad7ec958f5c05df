//! Input field resolution across ordered sources
//!
//! Some tools accept the same field from several places: a direct argument,
//! the result object of an earlier tool, or a generic input mapping.
//! [`resolve_fields`] walks an explicit, ordered list of [`InputSource`]s and
//! takes the first non-null value per field. Fields that no source provides
//! are collected and reported together in one [`ToolError::MissingInput`].

use serde_json::{Map, Value};

use super::entities::ToolCall;
use super::value_objects::ToolError;

/// A named JSON object consulted during resolution.
#[derive(Debug, Clone, Copy)]
pub struct InputSource<'a> {
    pub name: &'static str,
    values: Option<&'a Map<String, Value>>,
}

impl<'a> InputSource<'a> {
    pub fn new(name: &'static str, values: &'a Map<String, Value>) -> Self {
        Self {
            name,
            values: Some(values),
        }
    }

    /// A source that was not supplied at all
    pub fn absent(name: &'static str) -> Self {
        Self { name, values: None }
    }

    /// The nested object stored under `key` in a tool call, if any
    pub fn from_call(call: &'a ToolCall, key: &'static str) -> Self {
        Self {
            name: key,
            values: call.get_object(key),
        }
    }

    pub fn is_present(&self) -> bool {
        self.values.is_some()
    }

    fn lookup(&self, field: &str) -> Option<&'a Value> {
        self.values
            .and_then(|m| m.get(field))
            .filter(|v| !v.is_null())
    }
}

/// Resolve `fields` from `sources`, first non-null value wins per field.
///
/// Returns an object holding exactly the requested fields, or a
/// `MissingInput` error naming every unresolved field in request order.
pub fn resolve_fields(
    tool: &str,
    fields: &[&str],
    sources: &[InputSource<'_>],
) -> Result<Map<String, Value>, ToolError> {
    let mut resolved = Map::new();
    let mut missing = Vec::new();

    for &field in fields {
        match sources.iter().find_map(|s| s.lookup(field)) {
            Some(value) => {
                resolved.insert(field.to_string(), value.clone());
            }
            None => missing.push(field),
        }
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err(ToolError::missing_input(tool, missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    const FIELDS: [&str; 2] = ["weather_condition", "temperature"];

    #[test]
    fn test_first_source_wins() {
        let direct = obj(json!({ "weather_condition": "Snow" }));
        let weather = obj(json!({ "weather_condition": "Rain", "temperature": 4.0 }));

        let out = resolve_fields(
            "vibes",
            &FIELDS,
            &[
                InputSource::new("direct", &direct),
                InputSource::new("weather_data", &weather),
            ],
        )
        .unwrap();

        assert_eq!(out["weather_condition"], "Snow");
        assert_eq!(out["temperature"], 4.0);
    }

    #[test]
    fn test_null_falls_through_to_next_source() {
        let direct = obj(json!({ "temperature": null }));
        let input = obj(json!({ "weather_condition": "Clear", "temperature": 25 }));

        let out = resolve_fields(
            "vibes",
            &FIELDS,
            &[
                InputSource::new("direct", &direct),
                InputSource::absent("weather_data"),
                InputSource::new("input_data", &input),
            ],
        )
        .unwrap();

        assert_eq!(out["temperature"], 25);
        assert_eq!(out["weather_condition"], "Clear");
    }

    #[test]
    fn test_all_missing_fields_reported_at_once() {
        let empty = Map::new();
        let err = resolve_fields(
            "youtube_weather_vibes",
            &FIELDS,
            &[InputSource::new("direct", &empty), InputSource::absent("input_data")],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ToolError::missing_input("youtube_weather_vibes", FIELDS)
        );
    }

    #[test]
    fn test_from_call_reads_nested_object() {
        let call = ToolCall::new("vibes")
            .with_arg("weather_data", json!({ "temperature": 12 }))
            .with_arg("input_data", "not an object");

        assert!(InputSource::from_call(&call, "weather_data").is_present());
        assert!(!InputSource::from_call(&call, "input_data").is_present());
        assert!(!InputSource::from_call(&call, "other").is_present());
    }
}
