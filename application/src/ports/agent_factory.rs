//! Agent factory port
//!
//! The HTTP boundary and the CLI never share an [`Agent`] between tasks:
//! they ask an [`AgentFactory`] for a fresh one, so every request gets its
//! own registry and its own [`AgentState`](vibes_domain::AgentState).

use crate::agent::{Agent, AgentError};

/// Builds fully registered agents on demand.
///
/// Implementations live in the infrastructure layer, where the concrete
/// tools and their credentials are known.
pub trait AgentFactory: Send + Sync {
    fn create_agent(&self) -> Result<Agent, AgentError>;
}
