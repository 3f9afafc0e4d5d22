use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use crate::error::AppError;
use crate::observability::metrics::Metrics;
use crate::repository::ActiveRepository;

pub struct AppState {
    pub repository: Arc<dyn ActiveRepository>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(repository: Arc<dyn ActiveRepository>) -> Self {
        Self {
            repository,
            metrics: Metrics::new(),
        }
    }

    /// Runs one store operation and records its outcome and latency.
    pub async fn track<T, F>(&self, operation: &'static str, call: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        let start = Instant::now();
        let result = call.await;
        let elapsed = start.elapsed().as_secs_f64();

        match &result {
            Ok(_) => self.metrics.observe(operation, "ok", elapsed),
            Err(err) => {
                self.metrics.observe(operation, err.kind(), elapsed);
                tracing::warn!(operation, error = %err, "store operation failed");
            }
        }

        result
    }
}
