//! Tool Registry
//!
//! A [`ToolRegistry`] belongs to exactly one agent and maps tool names to
//! their metadata and implementation.
//!
//! # Invariants
//!
//! - Names are unique: registering a name twice fails with
//!   [`RegistryError::DuplicateTool`] and leaves the registry unchanged.
//! - Entries are only ever added; [`ToolRegistry::list`] returns them in
//!   registration order.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::entities::ToolMetadata;
use super::traits::Tool;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// A registry entry: metadata plus the implementation that serves it.
#[derive(Clone)]
pub struct RegisteredTool {
    pub metadata: ToolMetadata,
    pub implementation: Arc<dyn Tool>,
}

impl std::fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Per-agent mapping from tool name to (metadata, implementation)
#[derive(Debug, Default)]
pub struct ToolRegistry {
    /// Entries in registration order
    entries: Vec<RegisteredTool>,
    /// Name -> index into `entries`
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under `metadata.name`
    pub fn register(
        &mut self,
        metadata: ToolMetadata,
        implementation: Arc<dyn Tool>,
    ) -> Result<(), RegistryError> {
        if self.index.contains_key(&metadata.name) {
            return Err(RegistryError::DuplicateTool(metadata.name));
        }

        self.index.insert(metadata.name.clone(), self.entries.len());
        self.entries.push(RegisteredTool {
            metadata,
            implementation,
        });
        Ok(())
    }

    /// Register a tool using the metadata declared by its type
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) -> Result<(), RegistryError> {
        self.register(T::metadata(), Arc::new(tool))
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Result<&RegisteredTool, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| RegistryError::ToolNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Metadata of every registered tool, in registration order
    pub fn list(&self) -> Vec<&ToolMetadata> {
        self.entries.iter().map(|e| &e.metadata).collect()
    }

    /// Tools carrying all of the given tags, in registration order
    pub fn find_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&ToolMetadata> {
        self.entries
            .iter()
            .map(|e| &e.metadata)
            .filter(|m| m.has_all_tags(tags))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.metadata.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
