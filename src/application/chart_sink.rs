// Sink trait - the boundary with whatever renders the charts
use crate::domain::chart_spec::ChartSpec;
use async_trait::async_trait;

#[async_trait]
pub trait ChartSink: Send + Sync {
    /// Hand a resolved chart to its mount point
    async fn mount(&self, spec: ChartSpec);

    /// User-facing blocking notification
    async fn alert(&self, message: &str);
}
