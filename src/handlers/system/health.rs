use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /health - 200 when the store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.health.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            let error = ApiError::service_unavailable("database unavailable");
            let mut body = error.to_json();
            body["data"] = json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            });
            (error.status_code(), Json(body))
        }
    }
}
