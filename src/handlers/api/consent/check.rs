// handlers/api/consent/check.rs - GET /api/consent/check handler

use axum::extract::State;

use crate::api::{ApiResponse, ApiResult, QueryParams};
use crate::database::models::ConsentStatus;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::ConsentType;

/// GET /api/consent/check?buyer_hash=..&type=PDPA_BASIC
///
/// Lookup failures are logged and reported as a generic 500; the cause is
/// never echoed to the caller.
pub async fn check(State(state): State<AppState>, query: QueryParams) -> ApiResult<ConsentStatus> {
    let buyer_hash = query
        .first("buyer_hash")
        .ok_or_else(|| ApiError::bad_request("buyer_hash query parameter is required"))?;

    let consent_type: ConsentType = query
        .first("type")
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| {
            ApiError::bad_request(format!(
                "Invalid consent type. Must be one of: {}",
                ConsentType::valid_values()
            ))
        })?;

    match state.consent.check_consent(buyer_hash, consent_type).await {
        Ok(status) => Ok(ApiResponse::success(status)),
        Err(e) => {
            tracing::error!(buyer_hash, consent_type = %consent_type, error = %e, "consent check failed");
            Err(ApiError::internal_server_error("Failed to check consent"))
        }
    }
}
