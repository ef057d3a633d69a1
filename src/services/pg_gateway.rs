use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::database::models::{CaseDocument, ConsentRecord, ConsentStatus, DocumentStatusSummary};
use crate::database::{DatabaseError, DatabaseManager, QueryBuilder, SortDirection};
use crate::services::{ConsentChecker, DocumentFilter, DocumentStore, HealthProbe};
use crate::types::ConsentType;

/// Postgres-backed implementation of every store capability.
#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
    query_logging: bool,
    slow_query_threshold: Duration,
}

impl PgGateway {
    pub fn new(pool: PgPool, config: &DatabaseConfig) -> Self {
        Self {
            pool,
            query_logging: config.enable_query_logging,
            slow_query_threshold: Duration::from_millis(config.slow_query_threshold_ms),
        }
    }

    async fn timed<T, F>(&self, label: &str, sql: &str, fut: F) -> Result<T, DatabaseError>
    where
        F: Future<Output = Result<T, DatabaseError>>,
    {
        if self.query_logging {
            debug!(query = label, sql, "executing query");
        }
        let started = Instant::now();
        let result = fut.await;
        let elapsed = started.elapsed();
        if elapsed > self.slow_query_threshold {
            warn!(query = label, elapsed_ms = elapsed.as_millis() as u64, "slow query");
        }
        result
    }
}

/// Newest unrevoked consent row for the buyer and type.
fn consent_query(
    buyer_hash: &str,
    consent_type: ConsentType,
) -> Result<QueryBuilder<ConsentRecord>, DatabaseError> {
    Ok(QueryBuilder::<ConsentRecord>::new(ConsentRecord::TABLE)?
        .select(&ConsentRecord::COLUMNS)?
        .eq("buyer_hash", buyer_hash)?
        .eq("consent_type", consent_type.as_str())?
        .eq("revoked_at", Value::Null)?
        .order("granted_at", SortDirection::Desc)?
        .limit(1))
}

/// Every supplied identifier narrows the result; newest upload first, `id`
/// breaks ties.
fn documents_query(filter: &DocumentFilter) -> Result<QueryBuilder<CaseDocument>, DatabaseError> {
    QueryBuilder::<CaseDocument>::new(CaseDocument::TABLE)?
        .select(&CaseDocument::COLUMNS)?
        .eq_opt("buyer_hash", filter.buyer_hash.as_deref())?
        .eq_opt("case_id", filter.case_id.as_deref())?
        .order("uploaded_at", SortDirection::Desc)?
        .order("id", SortDirection::Asc)
}

/// The view is keyed by buyer only; without a buyer it is read unfiltered.
fn summary_query(buyer_hash: Option<&str>) -> Result<QueryBuilder<DocumentStatusSummary>, DatabaseError> {
    QueryBuilder::<DocumentStatusSummary>::new(DocumentStatusSummary::VIEW)?
        .select(&DocumentStatusSummary::COLUMNS)?
        .eq_opt("buyer_hash", buyer_hash)
}

#[async_trait]
impl ConsentChecker for PgGateway {
    async fn check_consent(
        &self,
        buyer_hash: &str,
        consent_type: ConsentType,
    ) -> Result<ConsentStatus, DatabaseError> {
        let query = consent_query(buyer_hash, consent_type)?;
        let sql = query.to_sql().query;

        let latest = self
            .timed("check_consent", &sql, async {
                query.fetch_all(&self.pool).await.map(|rows| rows.into_iter().next())
            })
            .await?;

        Ok(match latest {
            Some(record) => ConsentStatus::granted(consent_type, record),
            None => ConsentStatus::absent(consent_type),
        })
    }
}

#[async_trait]
impl DocumentStore for PgGateway {
    async fn list_documents(&self, filter: &DocumentFilter) -> Result<Vec<CaseDocument>, DatabaseError> {
        let query = documents_query(filter)?;
        let sql = query.to_sql().query;

        self.timed("list_documents", &sql, query.fetch_all(&self.pool)).await
    }

    async fn fetch_summary(
        &self,
        buyer_hash: Option<&str>,
    ) -> Result<Option<DocumentStatusSummary>, DatabaseError> {
        let query = summary_query(buyer_hash)?;
        let sql = query.to_sql().query;

        self.timed("fetch_summary", &sql, query.maybe_single(&self.pool)).await
    }
}

#[async_trait]
impl HealthProbe for PgGateway {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
