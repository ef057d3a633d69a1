pub mod consent_service;
pub mod document_service;
pub mod health;
pub mod pg_gateway;

pub use consent_service::ConsentChecker;
pub use document_service::{DocumentFilter, DocumentStore};
pub use health::HealthProbe;
pub use pg_gateway::PgGateway;
