use axum::{http::HeaderValue, http::Method, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// The complete HTTP surface, shared by the binary and the integration tests.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // JSON API
        .merge(api_routes())
        // Portal shells
        .merge(portal_routes())
        .fallback(not_found);

    // Global middleware
    if let Some(cors) = cors_layer(&state.config) {
        router = router.layer(cors);
    }
    if state.config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/consent/check", get(handlers::consent_check))
        .route("/api/documents", get(handlers::documents_list))
}

fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/buyer", get(handlers::buyer_page))
        .route("/agent", get(handlers::agent_page))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Permissive in development; otherwise only the configured origins, GET only.
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }
    if config.is_development() || config.security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET]),
    )
}
