//! HTTP API
//!
//! One agent is created per request through the [`AgentFactory`] port, so
//! concurrent requests never share tool results.

mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ErrorResponse, LocationRequest, UmbrellaResponse, VideoResponse, WeatherResponse};
pub use error::{ApiError, ServerError};
pub use router::build_router;
pub use state::ServerState;

use std::net::SocketAddr;
use std::sync::Arc;
use vibes_application::AgentFactory;

pub async fn serve(
    factory: Arc<dyn AgentFactory>,
    addr: SocketAddr,
    allowed_origins: &[String],
) -> Result<(), ServerError> {
    router::serve(ServerState::new(factory), addr, allowed_origins).await
}
