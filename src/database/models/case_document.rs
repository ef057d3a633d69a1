use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One uploaded file tied to a buyer and/or a case. Rows are written by the
/// upload flow; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CaseDocument {
    pub id: Uuid,
    /// IC, PAYSLIP, BANK_STATEMENT, KWSP, ...
    pub document_type: String,
    pub original_filename: String,
    pub file_size: i64,
    pub mime_type: String,
    /// pending, verified, rejected
    pub status: String,
    pub uploaded_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl CaseDocument {
    pub const TABLE: &'static str = "case_documents";

    /// Columns exposed to API clients, in response order.
    pub const COLUMNS: [&'static str; 8] = [
        "id",
        "document_type",
        "original_filename",
        "file_size",
        "mime_type",
        "status",
        "uploaded_at",
        "verified_at",
    ];
}
