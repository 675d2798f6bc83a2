//! Metrics registry
//!
//! - Counters only, monotonic, reset on process start
//! - Thread-safe via relaxed atomics
//! - The current planet count is read from the store, not counted here

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request counters for the catalog service
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    planets_created: AtomicU64,
    planets_updated: AtomicU64,
    planets_deleted: AtomicU64,
    planets_fetched: AtomicU64,
    lists_served: AtomicU64,
    fuel_estimates: AtomicU64,
    /// Requests rejected as malformed or invalid
    requests_rejected: AtomicU64,
    /// Lookups of ids that do not exist
    not_found: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_created(&self) {
        self.planets_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.planets_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.planets_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fetched(&self) {
        self.planets_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lists(&self) {
        self.lists_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fuel_estimates(&self) {
        self.fuel_estimates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            planets_created: self.planets_created.load(Ordering::Relaxed),
            planets_updated: self.planets_updated.load(Ordering::Relaxed),
            planets_deleted: self.planets_deleted.load(Ordering::Relaxed),
            planets_fetched: self.planets_fetched.load(Ordering::Relaxed),
            lists_served: self.lists_served.load(Ordering::Relaxed),
            fuel_estimates: self.fuel_estimates.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub planets_created: u64,
    pub planets_updated: u64,
    pub planets_deleted: u64,
    pub planets_fetched: u64,
    pub lists_served: u64,
    pub fuel_estimates: u64,
    pub requests_rejected: u64,
    pub not_found: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.planets_created, 0);
        assert_eq!(snapshot.fuel_estimates, 0);
        assert_eq!(snapshot.not_found, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_created();
        registry.increment_created();
        registry.increment_updated();
        registry.increment_deleted();
        registry.increment_fetched();
        registry.increment_lists();
        registry.increment_fuel_estimates();
        registry.increment_rejected();
        registry.increment_not_found();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.planets_created, 2);
        assert_eq!(snapshot.planets_updated, 1);
        assert_eq!(snapshot.planets_deleted, 1);
        assert_eq!(snapshot.planets_fetched, 1);
        assert_eq!(snapshot.lists_served, 1);
        assert_eq!(snapshot.fuel_estimates, 1);
        assert_eq!(snapshot.requests_rejected, 1);
        assert_eq!(snapshot.not_found, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_fuel_estimates();

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(json["fuel_estimates"], 1);
        assert_eq!(json["planets_created"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_created();
                    reg.increment_fetched();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.planets_created, 1000);
        assert_eq!(snapshot.planets_fetched, 1000);
    }
}
