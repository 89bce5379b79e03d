//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("Failed to initialize metrics")));

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    /// Upstream provider requests by provider and outcome
    pub upstream_requests: CounterVec,

    /// Upstream request duration by provider
    pub upstream_request_duration: HistogramVec,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let upstream_requests = register_counter_vec_with_registry!(
            Opts::new(
                "upstream_requests_total",
                "Total requests issued to upstream providers"
            ),
            &["provider", "outcome"],
            registry
        )?;

        let upstream_request_duration = register_histogram_vec_with_registry!(
            "upstream_request_duration_seconds",
            "Upstream request duration in seconds",
            &["provider"],
            registry
        )?;

        Ok(Self {
            registry,
            upstream_requests,
            upstream_request_duration,
        })
    }

    /// Render the registry in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&families, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("metrics are not valid UTF-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.is_ok());
    }

    #[test]
    fn test_export_contains_registered_families() {
        let metrics = Metrics::new().unwrap();
        metrics
            .upstream_requests
            .with_label_values(&["jolpica", "success"])
            .inc();

        let text = metrics.export().unwrap();
        assert!(text.contains("upstream_requests_total"));
    }
}
