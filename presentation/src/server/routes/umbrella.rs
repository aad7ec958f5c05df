use super::super::dto::UmbrellaResponse;
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use vibes_application::UmbrellaPipeline;

const CONTEXT: &str = "Error checking umbrella";

pub async fn umbrella_handler(
    State(state): State<ServerState>,
    Path(location): Path<String>,
) -> Result<Json<UmbrellaResponse>, ApiError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ApiError::bad_request("location cannot be empty"));
    }
    info!(location = %location, "Received umbrella request");

    let mut agent = state.agent().map_err(|e| ApiError::from_agent(CONTEXT, e))?;
    let advice = agent
        .run(&UmbrellaPipeline, location)
        .await
        .map_err(|e| ApiError::from_agent(CONTEXT, e))?;

    Ok(Json(UmbrellaResponse::new(location, advice)))
}
