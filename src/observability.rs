//! Observability hooks for resolution and reporting.
//!
//! Implement [`WarrantyMetrics`] to feed your monitoring system:
//!
//! ```ignore
//! use warranty_kit::observability::WarrantyMetrics;
//! use warranty_kit::resolver::PolicySource;
//! use std::time::Duration;
//!
//! struct PrometheusMetrics;
//!
//! impl WarrantyMetrics for PrometheusMetrics {
//!     fn record_resolution(&self, _serial: &str, source: PolicySource, _duration: Duration) {
//!         // counter!("warranty_resolutions", "source" => source.to_string()).inc();
//!     }
//! }
//!
//! // let resolver = PolicyResolver::new(inventory)
//! //     .with_metrics(Box::new(PrometheusMetrics));
//! ```
//!
//! The default methods log through the `log` crate. [`NoOpMetrics`] discards
//! everything and is what resolvers and services start with.

use crate::resolver::PolicySource;
use std::time::Duration;

/// Trait for warranty metrics collection.
pub trait WarrantyMetrics: Send + Sync {
    /// Record a completed single-unit resolution and the tier that decided it.
    fn record_resolution(&self, serial: &str, source: PolicySource, duration: Duration) {
        debug!("Resolved {} via {} in {:?}", serial, source, duration);
    }

    /// Record a completed batch projection.
    fn record_projection(&self, records: usize, duration: Duration) {
        debug!("Projected {} warranty records in {:?}", records, duration);
    }

    /// Record a collaborator failure.
    fn record_error(&self, context: &str, error: &str) {
        warn!("Warranty ERROR in {}: {}", context, error);
    }
}

/// Default metrics implementation (no-op).
#[derive(Clone, Default)]
pub struct NoOpMetrics;

impl WarrantyMetrics for NoOpMetrics {
    fn record_resolution(&self, _serial: &str, _source: PolicySource, _duration: Duration) {}
    fn record_projection(&self, _records: usize, _duration: Duration) {}
    fn record_error(&self, _context: &str, _error: &str) {}
}

/// Metrics that only log, using the trait defaults.
#[derive(Clone, Default)]
pub struct LogMetrics;

impl WarrantyMetrics for LogMetrics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_metrics() {
        let metrics = NoOpMetrics;
        metrics.record_resolution("SN1", PolicySource::Copy, Duration::from_millis(3));
        metrics.record_projection(10, Duration::from_millis(5));
        metrics.record_error("lookup", "down");
    }

    #[test]
    fn test_log_metrics() {
        let metrics = LogMetrics;
        metrics.record_resolution("SN1", PolicySource::Inventory, Duration::from_millis(1));
        metrics.record_error("query", "timeout");
    }
}
