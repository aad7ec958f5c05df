//! Agent domain entities

use super::value_objects::{AgentId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Per-agent record of the last result returned by each tool.
///
/// A result becomes visible only after the tool call completed successfully;
/// a later call to the same tool overwrites it (no history is kept).
/// [`get_tool_result`](Self::get_tool_result) returns `None` for a tool that
/// never ran, which is distinct from `Some(&Value::Null)` or `Some(&false)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentState {
    results: HashMap<String, Value>,
    /// Tool names in the order they first produced a result
    order: Vec<String>,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the result for `name`
    pub fn set_tool_result(&mut self, name: impl Into<String>, result: Value) {
        let name = name.into();
        if self.results.insert(name.clone(), result).is_none() {
            self.order.push(name);
        }
    }

    /// Last result of `name`, or `None` if the tool never completed
    pub fn get_tool_result(&self, name: &str) -> Option<&Value> {
        self.results.get(name)
    }

    pub fn has_result(&self, name: &str) -> bool {
        self.results.contains_key(name)
    }

    /// Tools that have a stored result, in first-completion order
    pub fn executed_tools(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Status of a task execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    InProgress,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of one tool invocation within a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRecord {
    pub tool_name: String,
    pub inputs: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Value>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ToolCallRecord {
    pub fn succeeded(tool_name: impl Into<String>, inputs: Value, outputs: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            inputs,
            outputs: Some(outputs),
            success: true,
            error: None,
            reasoning: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(tool_name: impl Into<String>, inputs: Value, error: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            inputs,
            outputs: None,
            success: false,
            error: Some(error.into()),
            reasoning: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: Option<String>) -> Self {
        self.reasoning = reasoning;
        self
    }
}

/// Complete record of one pipeline run on an agent.
///
/// Kept in memory for diagnostics only; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskExecution {
    pub task_id: TaskId,
    pub agent_id: AgentId,
    /// Pipeline that handled the task
    pub pipeline: String,
    /// Task description (e.g., the location string)
    pub input: String,
    pub steps: Vec<ToolCallRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: TaskStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl TaskExecution {
    pub fn start(agent_id: AgentId, pipeline: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            task_id: TaskId::generate(),
            agent_id,
            pipeline: pipeline.into(),
            input: input.into(),
            steps: Vec::new(),
            error: None,
            status: TaskStatus::InProgress,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record(&mut self, step: ToolCallRecord) {
        self.steps.push(step);
    }

    /// Close the record as completed. A record that is already closed keeps
    /// its first outcome.
    pub fn mark_completed(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.status = TaskStatus::Completed;
        self.finished_at = Some(Utc::now());
    }

    /// Close the record as failed. A record that is already closed keeps its
    /// first outcome.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        if self.status.is_terminal() {
            return;
        }
        self.status = TaskStatus::Failed;
        self.error = Some(error.into());
        self.finished_at = Some(Utc::now());
    }

    /// Names of the tools called so far, in call order
    pub fn called_tools(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.tool_name.as_str()).collect()
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &ToolCallRecord> {
        self.steps.iter().filter(|s| !s.success)
    }

    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }
}
