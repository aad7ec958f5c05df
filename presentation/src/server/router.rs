use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Build the API router. An empty `allowed_origins` allows any origin.
pub fn build_router(state: ServerState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(routes::meta::root_handler))
        .route("/health", get(routes::meta::health_handler))
        .route("/tools", get(routes::meta::tools_handler))
        .route("/weather", post(routes::weather::post_weather_handler))
        .route("/weather/{location}", get(routes::weather::get_weather_handler))
        .route("/recommend-video", post(routes::video::post_video_handler))
        .route(
            "/recommend-video/{location}",
            get(routes::video::get_video_handler),
        )
        .route("/umbrella/{location}", get(routes::umbrella::umbrella_handler))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

pub(super) async fn serve(
    state: ServerState,
    addr: SocketAddr,
    allowed_origins: &[String],
) -> Result<(), ServerError> {
    info!(%addr, "Binding REST server");
    let app = build_router(state, allowed_origins);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;
    use vibes_application::{Agent, AgentError, AgentFactory};
    use vibes_domain::weather::tool_names;
    use vibes_domain::{Tool, ToolCall, ToolError, ToolMetadata};

    struct FixedTool(Result<Value, ToolError>);

    #[async_trait]
    impl Tool for FixedTool {
        fn metadata() -> ToolMetadata {
            ToolMetadata::new("fixed", "Returns a fixed value")
        }

        async fn execute(&self, _call: &ToolCall) -> Result<Value, ToolError> {
            self.0.clone()
        }
    }

    struct StubFactory {
        weather: Result<Value, ToolError>,
    }

    impl AgentFactory for StubFactory {
        fn create_agent(&self) -> Result<Agent, AgentError> {
            let mut agent = Agent::new("stub");
            agent.register(
                ToolMetadata::new(tool_names::WEATHER_RETRIEVER, "weather").with_tag("weather"),
                Arc::new(FixedTool(self.weather.clone())),
            )?;
            agent.register(
                ToolMetadata::new(tool_names::UMBRELLA_DECIDER, "umbrella"),
                Arc::new(FixedTool(Ok(json!(true)))),
            )?;
            agent.register(
                ToolMetadata::new(tool_names::YOUTUBE_WEATHER_VIBES, "videos").with_tag("weather"),
                Arc::new(FixedTool(Ok(json!({
                    "weather_condition": "Partly cloudy",
                    "temperature": 22.5,
                    "search_query": "cloudy day chill warm summer music playlist",
                    "videos": [{
                        "title": "Cloudy Day Mix",
                        "channel_title": "Chill Channel",
                        "description": "",
                        "thumbnail_url": "",
                        "video_id": "abc",
                        "video_url": "https://www.youtube.com/watch?v=abc"
                    }],
                    "mock_data": false
                })))),
            )?;
            Ok(agent)
        }
    }

    fn paris() -> Value {
        json!({
            "location": "Paris",
            "temperature": 22.5,
            "weather_condition": "Partly cloudy",
            "precipitation_chance": 20.0
        })
    }

    fn app_with(weather: Result<Value, ToolError>) -> Router {
        let factory: Arc<dyn AgentFactory> = Arc::new(StubFactory { weather });
        build_router(ServerState::new(factory), &[])
    }

    fn app() -> Router {
        app_with(Ok(paris()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_welcome() {
        let (status, body) = send(app(), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_tools_lists_registration_order() {
        let (status, body) = send(app(), get_request("/tools")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                tool_names::WEATHER_RETRIEVER,
                tool_names::UMBRELLA_DECIDER,
                tool_names::YOUTUBE_WEATHER_VIBES
            ]
        );
    }

    #[tokio::test]
    async fn test_get_weather() {
        let (status, body) = send(app(), get_request("/weather/Paris")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["location"], "Paris");
        assert_eq!(body["temperature"], 22.5);
        assert_eq!(body["conditions"], "Partly cloudy");
        assert!(body["humidity"].is_null());
        assert_eq!(body["additional_info"]["precipitation_chance"], 20.0);
        assert!(body["additional_info"].get("temperature").is_none());
    }

    #[tokio::test]
    async fn test_post_weather() {
        let (status, body) = send(app(), post_json("/weather", json!({"location": "Paris"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["conditions"], "Partly cloudy");
    }

    #[tokio::test]
    async fn test_post_weather_empty_location_is_bad_request() {
        let (status, body) = send(app(), post_json("/weather", json!({"location": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "location cannot be empty");
    }

    #[tokio::test]
    async fn test_location_is_echoed_trimmed() {
        let (_, body) = send(app(), get_request("/weather/%20Paris")).await;
        assert_eq!(body["location"], "Paris");

        let (_, body) =
            send(app(), post_json("/recommend-video", json!({"location": " Paris  "}))).await;
        assert_eq!(body["location"], "Paris");

        let (_, body) = send(app(), get_request("/umbrella/Paris%20")).await;
        assert_eq!(body["location"], "Paris");
    }

    #[tokio::test]
    async fn test_weather_failure_is_500_with_detail() {
        let app = app_with(Err(ToolError::external_service("WeatherAPI", 401, "API key invalid")));

        let (status, body) = send(app, get_request("/weather/Paris")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Error getting weather information: weather_retriever: "));
        assert!(detail.contains("API key invalid"));
    }

    #[tokio::test]
    async fn test_recommend_video() {
        let (status, body) = send(app(), get_request("/recommend-video/Paris")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["weather_summary"], "Partly cloudy, 22.5°C");
        assert_eq!(body["video_title"], "Cloudy Day Mix");
        assert_eq!(body["video_url"], "https://www.youtube.com/watch?v=abc");
        assert_eq!(
            body["additional_info"]["search_query"],
            "cloudy day chill warm summer music playlist"
        );
    }

    #[tokio::test]
    async fn test_post_recommend_video() {
        let (status, body) =
            send(app(), post_json("/recommend-video", json!({"location": "Paris"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["location"], "Paris");
    }

    #[tokio::test]
    async fn test_umbrella() {
        let (status, body) = send(app(), get_request("/umbrella/Paris")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["needs_umbrella"], true);
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.contains("You need an umbrella today!"));
        assert!(summary.contains("Partly cloudy"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app().oneshot(get_request("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_origin_is_skipped() {
        // Building must not panic on a malformed origin
        let _ = cors_layer(&["http://ok.example".to_string(), "bad\norigin".to_string()]);
    }
}
