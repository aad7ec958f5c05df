//! Tool contract
//!
//! A [`Tool`] is an independently implemented, asynchronous unit of work.
//! Implementations must not keep shared mutable state: the same tool type
//! may be instantiated by several agents and executed concurrently.

use async_trait::async_trait;
use serde_json::Value;

use super::entities::{ToolCall, ToolMetadata};
use super::value_objects::ToolError;

/// Capability implemented by every tool.
///
/// `metadata()` is an associated function so the descriptor can be produced
/// from the type alone, before any instance exists (the registry and
/// discovery surfaces rely on this). The `Self: Sized` bound keeps the trait
/// usable as `dyn Tool`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Descriptor for this tool type
    fn metadata() -> ToolMetadata
    where
        Self: Sized;

    /// Execute the tool with named inputs.
    ///
    /// Unknown argument keys are ignored. A missing required key is reported
    /// as [`ToolError::MissingInput`], never as a panic.
    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError>;
}
