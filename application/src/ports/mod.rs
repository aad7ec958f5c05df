//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! implement.

pub mod agent_factory;
pub mod tool_hooks;
