use super::super::dto::{LocationRequest, VideoResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use vibes_application::RecommendVideoPipeline;

const CONTEXT: &str = "Error getting video recommendation";

pub async fn get_video_handler(
    State(state): State<ServerState>,
    Path(location): Path<String>,
) -> Result<Json<VideoResponse>, ApiError> {
    recommend(&state, location).await
}

pub async fn post_video_handler(
    State(state): State<ServerState>,
    Json(payload): Json<LocationRequest>,
) -> Result<Json<VideoResponse>, ApiError> {
    recommend(&state, payload.location).await
}

async fn recommend(state: &ServerState, location: String) -> Result<Json<VideoResponse>, ApiError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ApiError::bad_request("location cannot be empty"));
    }
    info!(location = %location, "Received video recommendation request");

    let mut agent = state.agent().map_err(|e| ApiError::from_agent(CONTEXT, e))?;
    let rec = agent
        .run(&RecommendVideoPipeline, location)
        .await
        .map_err(|e| ApiError::from_agent(CONTEXT, e))?;

    Ok(Json(VideoResponse::new(location, &rec)))
}
