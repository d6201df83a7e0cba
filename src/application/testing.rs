// Test doubles for the application seams
use crate::application::catalog::CHARTS;
use crate::application::metrics_source::{FetchError, MetricsSource};
use crate::domain::metric_series::MetricSeries;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Data(MetricSeries),
    Api(String),
    Status(u16),
    Unreachable,
    Malformed,
}

/// Answers by exact URL; URLs without a canned response get `fallback`.
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, FakeResponse>,
    fallback: Option<FakeResponse>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn respond(mut self, url: &str, response: FakeResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn fallback(mut self, response: FakeResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricsSource for FakeSource {
    async fn fetch(&self, url: &str) -> Result<MetricSeries, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let response = self
            .responses
            .get(url)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or(FakeResponse::Status(404));

        match response {
            FakeResponse::Data(data) => Ok(data),
            FakeResponse::Api(message) => Err(FetchError::Api { message }),
            FakeResponse::Status(status) => Err(FetchError::Status { status }),
            FakeResponse::Unreachable => Err(FetchError::Transport("connection refused".to_string())),
            FakeResponse::Malformed => Err(FetchError::Malformed("expected value".to_string())),
        }
    }
}

/// Two periods of data for every series any catalog chart asks for
pub fn full_payload() -> MetricSeries {
    let labels = vec!["2024.1Q".to_string(), "2024.2Q".to_string()];
    CHARTS
        .iter()
        .flat_map(|c| c.series.iter())
        .fold(MetricSeries::new(labels), |acc, s| {
            acc.with_series(s.key, vec![Some(1.5e12), Some(2.5e11)])
        })
}
