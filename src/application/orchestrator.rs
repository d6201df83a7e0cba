// Fetch orchestrator - one isolated fetch/build/mount pipeline per chart
use crate::application::chart_builder::{build_chart, BuildError};
use crate::application::chart_sink::ChartSink;
use crate::application::metrics_source::{FetchError, MetricsSource};
use crate::domain::chart_spec::ChartSpec;
use crate::domain::descriptor::ChartDescriptor;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

pub const BACKEND_DOWN_ALERT: &str =
    "백엔드 서버가 실행 중인지, CORS 설정이 올바른지 확인하세요!";

#[derive(Debug, Error)]
pub enum ChartLoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("payload could not be charted: {0}")]
    Build(#[from] BuildError),
}

impl ChartLoadError {
    pub fn backend_unreachable(&self) -> bool {
        match self {
            ChartLoadError::Fetch(e) => e.backend_unreachable(),
            ChartLoadError::Build(_) => true,
        }
    }
}

/// One chart paired with its resolved endpoint URL
#[derive(Debug, Clone)]
pub struct RenderTask {
    pub descriptor: &'static ChartDescriptor,
    pub url: String,
    pub company_id: String,
}

#[derive(Clone)]
pub struct FetchOrchestrator {
    source: Arc<dyn MetricsSource>,
    sink: Arc<dyn ChartSink>,
}

impl FetchOrchestrator {
    pub fn new(source: Arc<dyn MetricsSource>, sink: Arc<dyn ChartSink>) -> Self {
        Self { source, sink }
    }

    /// Spawn the pipeline for one chart. Nothing is returned to the caller
    /// except the task handle; failures stay inside the task.
    pub fn load(&self, task: RenderTask) -> JoinHandle<()> {
        let orchestrator = self.clone();
        tokio::spawn(async move { orchestrator.run(task).await })
    }

    pub async fn run(&self, task: RenderTask) {
        let mount_id = task.descriptor.mount_id;

        match self.render(&task).await {
            Ok(spec) => {
                tracing::info!(chart = mount_id, "Mounting chart with {} periods", spec.data.labels.len());
                self.sink.mount(spec).await;
            }
            Err(e) => {
                tracing::error!(chart = mount_id, url = %task.url, "Failed to load chart: {}", e);
                if task.descriptor.primary && e.backend_unreachable() {
                    self.alert(BACKEND_DOWN_ALERT).await;
                }
            }
        }
    }

    pub async fn alert(&self, message: &str) {
        tracing::warn!("Alert: {}", message);
        self.sink.alert(message).await;
    }

    async fn render(&self, task: &RenderTask) -> Result<ChartSpec, ChartLoadError> {
        tracing::debug!(chart = task.descriptor.mount_id, "Requesting {}", task.url);
        let data = self.source.fetch(&task.url).await?;
        Ok(build_chart(task.descriptor, &data, &task.company_id)?)
    }
}
