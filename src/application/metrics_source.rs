// Source trait for per-chart metric payloads
use crate::domain::metric_series::MetricSeries;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, connection refused, body read failure
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend responded with HTTP {status}")]
    Status { status: u16 },
    /// Envelope with `status != success`
    #[error("backend reported an error: {message}")]
    Api { message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Whether the failure points at the backend itself rather than at the
    /// requested data. An application-level error means the backend answered.
    pub fn backend_unreachable(&self) -> bool {
        !matches!(self, FetchError::Api { .. })
    }
}

#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch one endpoint and unwrap its success envelope
    async fn fetch(&self, url: &str) -> Result<MetricSeries, FetchError>;
}
