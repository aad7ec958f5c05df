use super::super::dto::{HealthResponse, MessageResponse, ToolListResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::State;
use tracing::debug;

pub const WELCOME: &str = "Welcome to the Weather Vibes API. Use /weather/{location} to get weather info and /recommend-video/{location} to get video recommendations.";

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME.to_string(),
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn tools_handler(State(state): State<ServerState>) -> Result<Json<ToolListResponse>, ApiError> {
    let agent = state
        .agent()
        .map_err(|e| ApiError::from_agent("Error creating agent", e))?;
    let tools: Vec<_> = agent.registry().list().into_iter().cloned().collect();
    debug!(tool_count = tools.len(), "Serving /tools request");
    Ok(Json(ToolListResponse { tools }))
}
