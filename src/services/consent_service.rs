use async_trait::async_trait;

use crate::database::models::ConsentStatus;
use crate::database::DatabaseError;
use crate::types::ConsentType;

/// Looks up whether a buyer currently holds a consent of the given type.
/// Consent records are owned elsewhere; this capability only reads them.
#[async_trait]
pub trait ConsentChecker: Send + Sync {
    async fn check_consent(
        &self,
        buyer_hash: &str,
        consent_type: ConsentType,
    ) -> Result<ConsentStatus, DatabaseError>;
}
