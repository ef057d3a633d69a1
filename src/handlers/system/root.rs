use axum::response::Json;
use serde_json::{json, Value};

/// GET / - service name, version and endpoint index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Homebuyer Portal API",
            "version": version,
            "description": "PDPA consent lookup and case document status for the buyer and agent portals",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "consent": "/api/consent/check?buyer_hash=&type=",
                "documents": "/api/documents?buyer_hash=&case_id=",
                "portals": "/buyer, /agent",
            }
        }
    }))
}
