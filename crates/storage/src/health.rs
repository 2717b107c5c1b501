//! Storage health checks.

use crate::file::JsonFileStore;
use telemetry::health;
use tracing::{debug, error};

/// Probe the state file location and update the storage component.
pub fn check_storage(store: &JsonFileStore) -> bool {
    match store.check_writable() {
        Ok(()) => {
            debug!(path = %store.path().display(), "State storage healthy");
            health().storage.set_healthy();
            true
        }
        Err(e) => {
            error!(path = %store.path().display(), "State storage health check failed: {}", e);
            health().storage.set_unhealthy(e.to_string());
            false
        }
    }
}
