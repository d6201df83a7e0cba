// Chart sinks - where resolved charts and alerts end up
use crate::application::chart_sink::ChartSink;
use crate::domain::chart_spec::ChartSpec;
use crate::domain::dashboard::{Dashboard, DashboardEvent};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::{mpsc, Mutex};

/// Forwards everything to a stream consumer
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<DashboardEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<DashboardEvent>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl ChartSink for ChannelSink {
    async fn mount(&self, spec: ChartSpec) {
        if self.tx.send(DashboardEvent::Chart { spec }).await.is_err() {
            tracing::debug!("Dashboard stream closed before chart was delivered");
        }
    }

    async fn alert(&self, message: &str) {
        let event = DashboardEvent::Alert {
            message: message.to_string(),
        };
        if self.tx.send(event).await.is_err() {
            tracing::debug!("Dashboard stream closed before alert was delivered");
        }
    }
}

/// Keeps the live chart per mount point. Mounting onto an occupied mount
/// point replaces the old chart instead of layering a second one on top.
#[derive(Default)]
pub struct ChartBoard {
    charts: Mutex<BTreeMap<String, ChartSpec>>,
    alerts: Mutex<Vec<String>>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn charts(&self) -> Vec<ChartSpec> {
        self.charts.lock().await.values().cloned().collect()
    }

    pub async fn alerts(&self) -> Vec<String> {
        self.alerts.lock().await.clone()
    }

    pub async fn snapshot(&self, company_id: &str) -> Dashboard {
        Dashboard::new(company_id.to_string(), self.charts().await, self.alerts().await)
    }
}

#[async_trait]
impl ChartSink for ChartBoard {
    async fn mount(&self, spec: ChartSpec) {
        let mut charts = self.charts.lock().await;
        if charts.insert(spec.mount_id.clone(), spec).is_some() {
            tracing::debug!("Replaced previously mounted chart");
        }
    }

    async fn alert(&self, message: &str) {
        self.alerts.lock().await.push(message.to_string());
    }
}
