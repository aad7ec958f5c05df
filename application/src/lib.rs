//! Application layer for weather-vibes
//!
//! This crate contains the agent orchestration core, the pipelines, and the
//! port definitions. It depends only on the domain layer.

pub mod agent;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use agent::{Agent, AgentError, Pipeline};
pub use ports::{
    agent_factory::AgentFactory,
    tool_hooks::{NoToolHooks, ToolContext, ToolHooks},
};
pub use use_cases::check_umbrella::{UmbrellaAdvice, UmbrellaPipeline, format_umbrella_summary};
pub use use_cases::get_weather::WeatherPipeline;
pub use use_cases::recommend_video::{RecommendVideoPipeline, VideoRecommendation};
