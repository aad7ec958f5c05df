use super::super::dto::{LocationRequest, WeatherResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use vibes_application::WeatherPipeline;

const CONTEXT: &str = "Error getting weather information";

pub async fn get_weather_handler(
    State(state): State<ServerState>,
    Path(location): Path<String>,
) -> Result<Json<WeatherResponse>, ApiError> {
    weather(&state, location).await
}

pub async fn post_weather_handler(
    State(state): State<ServerState>,
    Json(payload): Json<LocationRequest>,
) -> Result<Json<WeatherResponse>, ApiError> {
    weather(&state, payload.location).await
}

async fn weather(state: &ServerState, location: String) -> Result<Json<WeatherResponse>, ApiError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ApiError::bad_request("location cannot be empty"));
    }
    info!(location = %location, "Received weather request");

    let mut agent = state.agent().map_err(|e| ApiError::from_agent(CONTEXT, e))?;
    let report = agent
        .run(&WeatherPipeline, location)
        .await
        .map_err(|e| ApiError::from_agent(CONTEXT, e))?;

    Ok(Json(WeatherResponse::new(location, &report)))
}
