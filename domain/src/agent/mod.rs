//! Agent domain module
//!
//! Contains the per-agent result store and the in-memory execution record
//! kept for diagnostics.

pub mod entities;
pub mod value_objects;

pub use entities::{AgentState, TaskExecution, TaskStatus, ToolCallRecord};
pub use value_objects::{AgentId, TaskId};
