//! Agent error type

use thiserror::Error;
use vibes_domain::{RegistryError, ToolError};

/// Errors surfaced by [`Agent`](super::Agent) and its pipelines.
///
/// A pipeline either completes or reports exactly one of these; there is no
/// partial-success shape.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{tool}: {source}")]
    Tool {
        tool: String,
        #[source]
        source: ToolError,
    },

    #[error("No result recorded for tool '{0}'")]
    MissingState(String),

    #[error("Unexpected result from '{tool}': {message}")]
    InvalidResult { tool: String, message: String },

    #[error("Invalid task: {0}")]
    InvalidTask(String),
}

impl AgentError {
    pub fn tool(tool: impl Into<String>, source: ToolError) -> Self {
        Self::Tool {
            tool: tool.into(),
            source,
        }
    }

    pub fn invalid_result(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResult {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// The underlying tool error, if a tool call failed
    pub fn tool_error(&self) -> Option<&ToolError> {
        match self {
            AgentError::Tool { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether the caller's task itself was unusable
    pub fn is_client_error(&self) -> bool {
        matches!(self, AgentError::InvalidTask(_))
    }
}
