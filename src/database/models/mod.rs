pub mod case_document;
pub mod consent;
pub mod document_status;

pub use case_document::CaseDocument;
pub use consent::{ConsentRecord, ConsentStatus};
pub use document_status::DocumentStatusSummary;
