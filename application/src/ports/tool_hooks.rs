//! Tool lifecycle hooks port.
//!
//! [`ToolHooks`] is an **output port** notified around every tool call the
//! [`Agent`](crate::agent::Agent) makes. The presentation layer implements it
//! to show progress; tests implement it to observe call order.
//!
//! All methods have default no-op implementations, so implementers only
//! need to override the callbacks they care about.

use serde_json::Value;
use vibes_domain::{AgentId, TaskId, ToolError};

/// Context handed to hooks for one tool call
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub agent_id: AgentId,
    /// Present when the call happens inside [`Agent::run`](crate::agent::Agent::run)
    pub task_id: Option<TaskId>,
    /// Task description of the enclosing run, if any
    pub task: Option<String>,
    pub tool_name: String,
    pub inputs: Value,
    /// Tools that already produced a result on this agent
    pub previous_tools: Vec<String>,
}

/// Callbacks around tool execution
pub trait ToolHooks: Send + Sync {
    /// Called right before the tool executes
    fn on_tool_start(&self, _ctx: &ToolContext) {}

    /// Called after the tool returned a result
    fn on_tool_complete(&self, _ctx: &ToolContext, _result: &Value, _duration_ms: u64) {}

    /// Called after the tool returned an error
    fn on_tool_error(&self, _ctx: &ToolContext, _error: &ToolError) {}
}

/// No-op hooks for when nobody is listening
pub struct NoToolHooks;

impl ToolHooks for NoToolHooks {}
