//! Agent core
//!
//! An [`Agent`] owns a [`ToolRegistry`] and an [`AgentState`]. It executes
//! registered tools by name, stores every successful result under the tool's
//! name, and records each call in the [`TaskExecution`] of the surrounding
//! [`Agent::run`].
//!
//! Agents are not shared between tasks. Callers obtain a fresh one from an
//! [`AgentFactory`](crate::ports::agent_factory::AgentFactory) per request.

pub mod error;
pub mod pipeline;

pub use error::AgentError;
pub use pipeline::Pipeline;

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{Instrument, debug, info, info_span, warn};
use vibes_domain::util::preview_json;
use vibes_domain::{
    AgentId, AgentState, TaskExecution, Tool, ToolCall, ToolCallRecord, ToolMetadata,
    ToolRegistry,
};

use crate::ports::tool_hooks::{NoToolHooks, ToolContext, ToolHooks};

const RESULT_PREVIEW_BYTES: usize = 200;

pub struct Agent {
    id: AgentId,
    registry: ToolRegistry,
    state: AgentState,
    hooks: Arc<dyn ToolHooks>,
    /// Execution record of the run in progress
    current_task: Option<TaskExecution>,
    /// Execution record of the most recently finished run
    last_task: Option<TaskExecution>,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>) -> Self {
        Self {
            id: id.into(),
            registry: ToolRegistry::new(),
            state: AgentState::new(),
            hooks: Arc::new(NoToolHooks),
            current_task: None,
            last_task: None,
        }
    }

    pub fn with_generated_id() -> Self {
        Self::new(AgentId::generate())
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn last_task(&self) -> Option<&TaskExecution> {
        self.last_task.as_ref()
    }

    /// Register a tool; duplicate names are rejected and the registry is left unchanged.
    pub fn register(
        &mut self,
        metadata: ToolMetadata,
        implementation: Arc<dyn Tool>,
    ) -> Result<(), AgentError> {
        let name = metadata.name.clone();
        self.registry.register(metadata, implementation)?;
        debug!("Agent {} registered tool '{}'", self.id, name);
        Ok(())
    }

    /// Register a tool using its own [`Tool::metadata`]
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) -> Result<(), AgentError> {
        self.register(T::metadata(), Arc::new(tool))
    }

    /// Execute a registered tool.
    ///
    /// On success the result replaces any earlier result stored under the same
    /// tool name. On failure the state is left untouched and the error
    /// propagates; the agent never retries.
    pub async fn call_tool(&mut self, call: ToolCall) -> Result<Value, AgentError> {
        let implementation = Arc::clone(&self.registry.get(&call.tool_name)?.implementation);

        let ctx = ToolContext {
            agent_id: self.id.clone(),
            task_id: self.current_task.as_ref().map(|t| t.task_id.clone()),
            task: self.current_task.as_ref().map(|t| t.input.clone()),
            tool_name: call.tool_name.clone(),
            inputs: call.arguments_json(),
            previous_tools: self.state.executed_tools().to_vec(),
        };

        let span = info_span!(
            "tool",
            agent_id = %ctx.agent_id,
            task_id = ctx.task_id.as_ref().map(|t| t.as_str()).unwrap_or("-"),
            tool = %ctx.tool_name,
        );

        self.hooks.on_tool_start(&ctx);
        let started = Instant::now();
        let outcome = implementation.execute(&call).instrument(span).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                debug!(
                    "Tool '{}' completed in {}ms: {}",
                    call.tool_name,
                    duration_ms,
                    preview_json(&result, RESULT_PREVIEW_BYTES)
                );
                self.hooks.on_tool_complete(&ctx, &result, duration_ms);
                if let Some(task) = self.current_task.as_mut() {
                    task.record(
                        ToolCallRecord::succeeded(&call.tool_name, ctx.inputs.clone(), result.clone())
                            .with_reasoning(call.reasoning.clone()),
                    );
                }
                self.state.set_tool_result(&call.tool_name, result.clone());
                Ok(result)
            }
            Err(e) => {
                warn!("Tool '{}' failed after {}ms: {}", call.tool_name, duration_ms, e);
                self.hooks.on_tool_error(&ctx, &e);
                if let Some(task) = self.current_task.as_mut() {
                    task.record(
                        ToolCallRecord::failed(&call.tool_name, ctx.inputs.clone(), e.to_string())
                            .with_reasoning(call.reasoning.clone()),
                    );
                }
                Err(AgentError::tool(call.tool_name, e))
            }
        }
    }

    /// Run a pipeline for one task, recording a [`TaskExecution`].
    ///
    /// The record is available from [`Agent::last_task`] afterwards, whether
    /// the pipeline succeeded or not.
    pub async fn run<P>(&mut self, pipeline: &P, task: &str) -> Result<P::Output, AgentError>
    where
        P: Pipeline + ?Sized,
    {
        let execution = TaskExecution::start(self.id.clone(), pipeline.name(), task);
        info!(
            "Agent {} starting '{}' task {} for {:?}",
            self.id,
            pipeline.name(),
            execution.task_id,
            task
        );
        self.current_task = Some(execution);

        let outcome = pipeline.execute(self, task).await;

        if let Some(mut execution) = self.current_task.take() {
            match &outcome {
                Ok(_) => execution.mark_completed(),
                Err(e) => {
                    execution.mark_failed(e.to_string());
                    let failed: Vec<&str> = execution
                        .failed_steps()
                        .map(|s| s.tool_name.as_str())
                        .collect();
                    warn!(
                        "Task {} failed: {} (failed steps: {})",
                        execution.task_id,
                        e,
                        if failed.is_empty() { "none".to_string() } else { failed.join(", ") }
                    );
                }
            }
            info!(
                "Task {} {} after {} step(s)",
                execution.task_id,
                execution.status,
                execution.steps.len()
            );
            self.last_task = Some(execution);
        }

        outcome
    }

    /// Stored result for `tool`, or [`AgentError::MissingState`]
    pub fn require_result(&self, tool: &str) -> Result<&Value, AgentError> {
        self.state
            .get_tool_result(tool)
            .ok_or_else(|| AgentError::MissingState(tool.to_string()))
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("registry", &self.registry)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
