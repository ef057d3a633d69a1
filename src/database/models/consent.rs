use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::types::ConsentType;

/// A consent grant as stored in `consent_records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ConsentRecord {
    pub id: Uuid,
    pub consent_version: Option<String>,
    pub granted_at: DateTime<Utc>,
}

impl ConsentRecord {
    pub const TABLE: &'static str = "consent_records";

    pub const COLUMNS: [&'static str; 3] = ["id", "consent_version", "granted_at"];
}

/// Result of a consent lookup for one (buyer, consent type) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentStatus {
    pub has_consent: bool,
    pub consent_type: ConsentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_at: Option<DateTime<Utc>>,
}

impl ConsentStatus {
    pub fn absent(consent_type: ConsentType) -> Self {
        Self {
            has_consent: false,
            consent_type,
            consent_id: None,
            consent_version: None,
            granted_at: None,
        }
    }

    pub fn granted(consent_type: ConsentType, record: ConsentRecord) -> Self {
        Self {
            has_consent: true,
            consent_type,
            consent_id: Some(record.id),
            consent_version: record.consent_version,
            granted_at: Some(record.granted_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_consent_serializes_minimal_shape() {
        let status = ConsentStatus::absent(ConsentType::PdpaMarketing);
        assert_eq!(
            serde_json::to_value(status).unwrap(),
            json!({ "hasConsent": false, "consentType": "PDPA_MARKETING" })
        );
    }

    #[test]
    fn granted_consent_carries_record_metadata() {
        let id = Uuid::new_v4();
        let granted_at = Utc::now();
        let status = ConsentStatus::granted(
            ConsentType::PdpaBasic,
            ConsentRecord { id, consent_version: Some("v2".into()), granted_at },
        );
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["hasConsent"], json!(true));
        assert_eq!(value["consentId"], json!(id.to_string()));
        assert_eq!(value["consentVersion"], json!("v2"));
        assert!(value["grantedAt"].is_string());
    }
}
