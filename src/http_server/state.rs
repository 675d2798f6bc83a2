//! Shared handler state
//!
//! Constructed once at startup and cloned into every handler. The store is
//! owned here and dropped when the server shuts down.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::catalog::PlanetStore;
use crate::observability::{Logger, MetricsRegistry};

use super::errors::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<PlanetStore>,
    pub metrics: Arc<MetricsRegistry>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Fresh state with an empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(PlanetStore::new()))
    }

    /// State around an existing store
    pub fn with_store(store: Arc<PlanetStore>) -> Self {
        Self {
            store,
            metrics: Arc::new(MetricsRegistry::new()),
            started_at: Utc::now(),
        }
    }

    /// Count and log a failed request, then hand the error back
    pub fn reject(&self, operation: &str, err: ApiError) -> ApiError {
        match err {
            ApiError::NotFound => self.metrics.increment_not_found(),
            _ => self.metrics.increment_rejected(),
        }
        let status = err.status_code();
        let reason = err.to_string();
        Logger::warn(
            "REQUEST_REJECTED",
            &[
                ("operation", operation),
                ("reason", reason.as_str()),
                ("status", status.as_str()),
            ],
        );
        err
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
