use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-buyer completeness rollup, computed by the `v_buyer_document_status`
/// view. `Default` is the shape returned when the view has no row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DocumentStatusSummary {
    pub docs_uploaded: i64,
    pub has_ic: bool,
    pub has_payslip: bool,
    pub has_bank_statement: bool,
    pub has_kwsp: bool,
    pub all_required_uploaded: bool,
}

impl DocumentStatusSummary {
    pub const VIEW: &'static str = "v_buyer_document_status";

    pub const COLUMNS: [&'static str; 6] = [
        "docs_uploaded",
        "has_ic",
        "has_payslip",
        "has_bank_statement",
        "has_kwsp",
        "all_required_uploaded",
    ];
}
