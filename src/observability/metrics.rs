use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub store_operations_total: IntCounterVec,
    pub store_operation_latency_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let store_operations_total = IntCounterVec::new(
            Opts::new(
                "store_operations_total",
                "Total store operations by operation and outcome",
            ),
            &["operation", "outcome"],
        )
        .expect("valid store_operations_total metric");

        let store_operation_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "store_operation_latency_seconds",
                "Latency of store operations in seconds",
            ),
            &["operation"],
        )
        .expect("valid store_operation_latency_seconds metric");

        registry
            .register(Box::new(store_operations_total.clone()))
            .expect("register store_operations_total");
        registry
            .register(Box::new(store_operation_latency_seconds.clone()))
            .expect("register store_operation_latency_seconds");

        Self {
            registry,
            store_operations_total,
            store_operation_latency_seconds,
        }
    }

    pub fn observe(&self, operation: &str, outcome: &str, elapsed_seconds: f64) {
        self.store_operations_total
            .with_label_values(&[operation, outcome])
            .inc();
        self.store_operation_latency_seconds
            .with_label_values(&[operation])
            .observe(elapsed_seconds);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Metrics;

    #[test]
    fn observed_operations_show_up_in_exposition() {
        let metrics = Metrics::new();
        metrics.observe("end_service", "ok", 0.002);

        let body = metrics.encode().unwrap();
        assert!(body.contains("store_operations_total"));
        assert!(body.contains("operation=\"end_service\""));
    }
}
