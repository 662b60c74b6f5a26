use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    models::HealthResponse,
    services::{
        ExtractionConfig, HttpSuggestionClient, MediaExtractor, SuggestionSource, YtDlpExtractor,
    },
};

pub mod assets;
pub mod autocomplete;
pub mod search;
pub mod video;

/// Shared application state
pub struct AppState {
    pub extractor: Arc<dyn MediaExtractor>,
    pub suggestions: Arc<dyn SuggestionSource>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        extractor: Arc<dyn MediaExtractor>,
        suggestions: Arc<dyn SuggestionSource>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            extractor,
            suggestions,
            static_dir: static_dir.into(),
        }
    }

    /// Wires the production collaborators from configuration
    pub fn from_config(config: &Config, extraction: ExtractionConfig) -> Self {
        Self::new(
            Arc::new(YtDlpExtractor::new(config.ytdlp_path.clone(), extraction)),
            Arc::new(HttpSuggestionClient::new(config.suggest_url.clone())),
            config.static_dir.clone(),
        )
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/app.js", get(assets::script))
        .route("/styles.css", get(assets::stylesheet))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", get(search::search))
        .route("/autocomplete", get(autocomplete::autocomplete))
        .route("/video", get(video::video))
        .route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Raw query string pairs in request order. Unlike a typed `Query<T>`,
/// repeated keys never reject the request.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored
pub(crate) fn first_param(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Trims a query parameter, treating an absent one as empty
pub(crate) fn trimmed(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{extractor::MockMediaExtractor, suggestions::MockSuggestionSource};
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn idle_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::new(MockMediaExtractor::new()),
            Arc::new(MockSuggestionSource::new()),
            "/nonexistent",
        ))
    }

    #[test]
    fn test_first_param() {
        let pairs = vec![
            ("q".to_string(), "a".to_string()),
            ("id".to_string(), "x".to_string()),
            ("q".to_string(), "b".to_string()),
        ];
        assert_eq!(first_param(&pairs, "q"), Some("a".to_string()));
        assert_eq!(first_param(&pairs, "id"), Some("x".to_string()));
        assert_eq!(first_param(&pairs, "limit"), None);
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed(None), "");
        assert_eq!(trimmed(Some("  rust  ".to_string())), "rust");
        assert_eq!(trimmed(Some("\t\n".to_string())), "");
    }

    #[tokio::test]
    async fn test_health_route_echoes_request_id() {
        let app = create_router(idle_state());
        let request_id = "6f1c2a8e-1d2b-4a53-9b8e-2f0c7e5d4a11";

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("x-request-id", request_id)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-request-id"], request_id);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_router(idle_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
