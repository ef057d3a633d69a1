// handlers/api/documents/list.rs - GET /api/documents handler

use axum::extract::State;
use serde::Serialize;

use crate::api::{ApiResponse, ApiResult, QueryParams};
use crate::database::models::{CaseDocument, DocumentStatusSummary};
use crate::error::ApiError;
use crate::services::DocumentFilter;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentListing {
    pub documents: Vec<CaseDocument>,
    pub summary: DocumentStatusSummary,
}

/// GET /api/documents?buyer_hash=..&case_id=..
///
/// A failed document query returns 500 carrying the store's own message.
/// The summary is best effort: a failed or empty summary read falls back to
/// the all-zero default and never fails the request. The summary is keyed by
/// buyer only, so a case-only request reads the view unfiltered.
pub async fn list(State(state): State<AppState>, query: QueryParams) -> ApiResult<DocumentListing> {
    let filter = DocumentFilter::new(query.first_owned("buyer_hash"), query.first_owned("case_id"));
    if filter.is_empty() {
        return Err(ApiError::bad_request("buyer_hash or case_id is required"));
    }

    let (documents, summary) = tokio::join!(
        state.documents.list_documents(&filter),
        state.documents.fetch_summary(filter.buyer_hash.as_deref()),
    );

    let documents = documents.map_err(|e| {
        tracing::error!(
            buyer_hash = filter.buyer_hash.as_deref(),
            case_id = filter.case_id.as_deref(),
            error = %e,
            "document query failed"
        );
        ApiError::internal_server_error(e.to_string())
    })?;

    let summary = match summary {
        Ok(Some(summary)) => summary,
        Ok(None) => DocumentStatusSummary::default(),
        Err(e) => {
            tracing::warn!(
                buyer_hash = filter.buyer_hash.as_deref(),
                error = %e,
                "document summary unavailable, using default"
            );
            DocumentStatusSummary::default()
        }
    };

    Ok(ApiResponse::success(DocumentListing { documents, summary }))
}
