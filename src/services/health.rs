use async_trait::async_trait;

use crate::database::DatabaseError;

#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), DatabaseError>;
}
