use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ConsentChecker, DocumentStore, HealthProbe, PgGateway};

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub consent: Arc<dyn ConsentChecker>,
    pub documents: Arc<dyn DocumentStore>,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        consent: Arc<dyn ConsentChecker>,
        documents: Arc<dyn DocumentStore>,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            consent,
            documents,
            health,
        }
    }

    /// Wire every capability to the same Postgres gateway.
    pub fn with_gateway(config: AppConfig, gateway: PgGateway) -> Self {
        let gateway = Arc::new(gateway);
        Self::new(config, gateway.clone(), gateway.clone(), gateway)
    }
}
