use std::sync::Arc;
use vibes_application::{Agent, AgentError, AgentFactory};

/// Shared handler state: only the factory is shared, never an agent
#[derive(Clone)]
pub struct ServerState {
    factory: Arc<dyn AgentFactory>,
}

impl ServerState {
    pub fn new(factory: Arc<dyn AgentFactory>) -> Self {
        Self { factory }
    }

    /// A fresh agent for one request
    pub(crate) fn agent(&self) -> Result<Agent, AgentError> {
        self.factory.create_agent()
    }
}
