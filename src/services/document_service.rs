use async_trait::async_trait;

use crate::database::models::{CaseDocument, DocumentStatusSummary};
use crate::database::DatabaseError;

/// Which documents to list. Each supplied identifier becomes an equality
/// filter; both together narrow to their intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub buyer_hash: Option<String>,
    pub case_id: Option<String>,
}

impl DocumentFilter {
    /// Empty strings count as absent.
    pub fn new(buyer_hash: Option<String>, case_id: Option<String>) -> Self {
        Self {
            buyer_hash: buyer_hash.filter(|s| !s.is_empty()),
            case_id: case_id.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buyer_hash.is_none() && self.case_id.is_none()
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Matching documents, newest upload first.
    async fn list_documents(&self, filter: &DocumentFilter) -> Result<Vec<CaseDocument>, DatabaseError>;

    /// At most one summary row. With no buyer the view is read unfiltered,
    /// which only yields a row when the view holds exactly one.
    async fn fetch_summary(
        &self,
        buyer_hash: Option<&str>,
    ) -> Result<Option<DocumentStatusSummary>, DatabaseError>;
}
