// HTTP metrics source backed by the dashboard API
use crate::application::metrics_source::{FetchError, MetricsSource};
use crate::domain::envelope::ApiEnvelope;
use crate::domain::metric_series::MetricSeries;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct HttpMetricsSource {
    client: reqwest::Client,
}

impl HttpMetricsSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn fetch(&self, url: &str) -> Result<MetricSeries, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // A body on a non-2xx response is never trusted
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("{} answered {}: {}", url, status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let envelope: ApiEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        envelope
            .into_result()
            .map_err(|message| FetchError::Api { message })
    }
}
