//! Pipeline contract
//!
//! A pipeline is the hard-coded sequence of tool calls an agent performs for
//! one task. Steps run strictly in order because later steps consume earlier
//! results; the first failing step aborts the pipeline.

use async_trait::async_trait;

use super::{Agent, AgentError};

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Output: Send;

    /// Short identifier recorded in the task execution (e.g., "umbrella")
    fn name(&self) -> &'static str;

    /// Run every step against `agent` for `task`
    async fn execute(&self, agent: &mut Agent, task: &str) -> Result<Self::Output, AgentError>;
}
