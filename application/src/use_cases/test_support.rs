//! Stub tools for pipeline tests.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use vibes_domain::weather::tool_names;
use vibes_domain::{Tool, ToolCall, ToolError, ToolMetadata};

use crate::agent::Agent;

/// Returns a fixed value (or error) and counts invocations
pub(crate) struct StubTool {
    pub result: Result<Value, ToolError>,
    pub calls: Arc<AtomicUsize>,
    /// Last call received, as JSON
    pub last_args: Arc<Mutex<Value>>,
}

impl StubTool {
    pub fn ok(value: Value) -> Self {
        Self {
            result: Ok(value),
            calls: Arc::new(AtomicUsize::new(0)),
            last_args: Arc::new(Mutex::new(Value::Null)),
        }
    }

    pub fn failing(error: ToolError) -> Self {
        Self {
            result: Err(error),
            ..Self::ok(Value::Null)
        }
    }
}

#[async_trait]
impl Tool for StubTool {
    fn metadata() -> ToolMetadata {
        ToolMetadata::new("stub", "Stub tool")
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_args.lock().unwrap() = call.arguments_json();
        self.result.clone()
    }
}

pub(crate) fn paris_weather() -> Value {
    json!({
        "location": "Paris",
        "temperature": 22.5,
        "weather_condition": "Partly cloudy",
        "precipitation_chance": 20.0
    })
}

/// Register `tool` under `name`, returning a handle sharing its counters
pub(crate) fn register_stub(agent: &mut Agent, name: &str, tool: StubTool) -> StubHandle {
    let handle = StubHandle {
        calls: Arc::clone(&tool.calls),
        last_args: Arc::clone(&tool.last_args),
    };
    agent
        .register(ToolMetadata::new(name, "stub"), Arc::new(tool))
        .unwrap();
    handle
}

pub(crate) struct StubHandle {
    calls: Arc<AtomicUsize>,
    last_args: Arc<Mutex<Value>>,
}

impl StubHandle {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_args(&self) -> Value {
        self.last_args.lock().unwrap().clone()
    }
}

pub(crate) fn weather_agent(weather: StubTool) -> (Agent, StubHandle) {
    let mut agent = Agent::new("test-agent");
    let handle = register_stub(&mut agent, tool_names::WEATHER_RETRIEVER, weather);
    (agent, handle)
}
