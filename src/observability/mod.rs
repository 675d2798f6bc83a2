//! Observability for the catalog service
//!
//! - Structured JSON logging ([`Logger`])
//! - Request counters ([`MetricsRegistry`])
//!
//! Observability is read-only: nothing here feeds back into request handling.
//!
//! ```ignore
//! use exocatalog::observability::{Logger, MetricsRegistry};
//!
//! Logger::info("PLANET_CREATED", &[("id", "…")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
