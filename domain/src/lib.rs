//! Domain layer for weather-vibes
//!
//! This crate contains the core types and rules of the agent framework and
//! the Weather Vibes application. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A **tool** is an independently implemented asynchronous unit of work with
//! declared input/output schemas. Tools are registered in a per-agent
//! [`ToolRegistry`] under unique names.
//!
//! ## Agent state
//!
//! Every agent keeps an [`AgentState`]: the last successful result per tool
//! name. Later tools and formatters read from it to assemble an answer.
//!
//! ## Weather Vibes
//!
//! The [`weather`] module holds the pure rules of the demo application:
//! the music search-phrase heuristic and the umbrella decision.

pub mod agent;
pub mod tool;
pub mod util;
pub mod weather;

// Re-export commonly used types
pub use agent::{AgentId, AgentState, TaskExecution, TaskId, TaskStatus, ToolCallRecord};
pub use tool::{
    InputSource, RegisteredTool, RegistryError, Tool, ToolCall, ToolError, ToolExample,
    ToolMetadata, ToolRegistry, resolve_fields,
};
pub use weather::{
    VibesReport, VideoEntry, WeatherReport, needs_umbrella, search_query,
};
