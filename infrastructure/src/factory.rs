//! Weather Vibes agent factory
//!
//! Implements [`AgentFactory`]: every call yields a fresh [`Agent`] with the
//! three Weather Vibes tools registered. The HTTP client, the credentials
//! and the hooks are shared between agents; registries and states are not.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use vibes_application::{Agent, AgentError, AgentFactory, NoToolHooks, ToolHooks};

use crate::config::FileConfig;
use crate::credentials::Credentials;
use crate::tools::{UmbrellaDeciderTool, WeatherRetrieverTool, YoutubeWeatherVibesTool};

const USER_AGENT: &str = concat!("weather-vibes/", env!("CARGO_PKG_VERSION"));

pub struct WeatherVibesAgentFactory {
    client: reqwest::Client,
    weather_base_url: String,
    youtube_base_url: String,
    max_results: u32,
    credentials: Credentials,
    hooks: Arc<dyn ToolHooks>,
}

impl WeatherVibesAgentFactory {
    /// Build the shared HTTP client from `config`.
    pub fn new(config: &FileConfig, credentials: Credentials) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, config, credentials))
    }

    pub fn with_client(client: reqwest::Client, config: &FileConfig, credentials: Credentials) -> Self {
        Self {
            client,
            weather_base_url: config.weather.base_url.clone(),
            youtube_base_url: config.youtube.base_url.clone(),
            max_results: config.youtube.max_results,
            credentials,
            hooks: Arc::new(NoToolHooks),
        }
    }

    /// Hooks attached to every agent this factory creates
    pub fn with_hooks(mut self, hooks: Arc<dyn ToolHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl AgentFactory for WeatherVibesAgentFactory {
    fn create_agent(&self) -> Result<Agent, AgentError> {
        let mut agent = Agent::with_generated_id().with_hooks(Arc::clone(&self.hooks));

        agent.register_tool(WeatherRetrieverTool::new(
            self.client.clone(),
            self.weather_base_url.as_str(),
            &self.credentials,
        ))?;
        agent.register_tool(UmbrellaDeciderTool)?;
        agent.register_tool(YoutubeWeatherVibesTool::new(
            self.client.clone(),
            self.youtube_base_url.as_str(),
            self.max_results,
            &self.credentials,
        ))?;

        debug!("Created agent {} with {} tools", agent.id(), agent.registry().len());
        Ok(agent)
    }
}
