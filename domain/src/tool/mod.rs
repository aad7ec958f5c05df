//! Tool domain module
//!
//! This module defines the core abstractions of the **Tool System**: how an
//! agent discovers, invokes and chains independently implemented tools.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────────┐
//! │ ToolMetadata │───▶│ ToolRegistry │───▶│ Tool::execute(call)  │
//! │ (per type)   │    │ (per agent)  │    │ -> Value | ToolError │
//! └──────────────┘    └──────────────┘    └──────────────────────┘
//! ```
//!
//! - [`ToolMetadata`]: name, description, tags, input/output schema
//! - [`ToolCall`]: named arguments for one invocation
//! - [`Tool`]: async capability; `metadata()` is callable without an instance
//! - [`ToolRegistry`]: unique names, registration-order listing
//! - [`resolve_fields`]: ordered multi-source input resolution
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`Agent`): looks tools up and records their results
//! - **Infrastructure**: concrete tools that talk to external APIs

pub mod entities;
pub mod registry;
pub mod resolve;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolExample, ToolMetadata};
pub use registry::{RegisteredTool, RegistryError, ToolRegistry};
pub use resolve::{InputSource, resolve_fields};
pub use traits::Tool;
pub use value_objects::ToolError;
