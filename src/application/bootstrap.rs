// Bootstrap driver - launches every chart pipeline for one company
use crate::application::catalog::CHARTS;
use crate::application::chart_sink::ChartSink;
use crate::application::metrics_source::MetricsSource;
use crate::application::orchestrator::{FetchOrchestrator, RenderTask};
use crate::domain::dashboard::MountPoint;
use crate::domain::descriptor::ChartDescriptor;
use crate::infrastructure::config::ApiSettings;
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

pub const MISSING_COMPANY_ALERT: &str = "기업 코드가 지정되지 않았습니다!";

#[derive(Debug, Error, PartialEq)]
pub enum BootstrapError {
    #[error("company id is empty")]
    MissingCompanyId,
}

/// Handles of the launched chart tasks. Dropping it leaves the tasks running.
#[derive(Debug)]
pub struct LoadHandle {
    handles: Vec<JoinHandle<()>>,
}

impl LoadHandle {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Wait until every chart has either mounted or failed
    pub async fn join(self) {
        for result in join_all(self.handles).await {
            if let Err(e) = result {
                tracing::error!("Chart task aborted: {}", e);
            }
        }
    }
}

#[derive(Clone)]
pub struct DashboardBootstrap {
    source: Arc<dyn MetricsSource>,
    api: ApiSettings,
    charts: &'static [ChartDescriptor],
}

impl DashboardBootstrap {
    pub fn new(source: Arc<dyn MetricsSource>, api: ApiSettings) -> Self {
        Self {
            source,
            api,
            charts: CHARTS,
        }
    }

    #[cfg(test)]
    pub fn with_charts(mut self, charts: &'static [ChartDescriptor]) -> Self {
        self.charts = charts;
        self
    }

    pub fn default_company(&self) -> Option<&str> {
        self.api.default_company.as_deref()
    }

    pub fn mount_points(&self) -> Vec<MountPoint> {
        self.charts
            .iter()
            .map(|c| MountPoint {
                mount_id: c.mount_id.to_string(),
                endpoint: c.endpoint.to_string(),
                title: c.title.to_string(),
            })
            .collect()
    }

    /// One task per chart, in catalog order. Charts sharing an endpoint get
    /// separate tasks against the same URL.
    pub fn tasks(&self, company_id: &str) -> Vec<RenderTask> {
        let charts: &'static [ChartDescriptor] = self.charts;
        charts
            .iter()
            .map(|descriptor| RenderTask {
                descriptor,
                url: self
                    .api
                    .endpoint_url(descriptor.mount_id, company_id, descriptor.endpoint),
                company_id: company_id.to_string(),
            })
            .collect()
    }

    pub async fn load_all(
        &self,
        company_id: &str,
        sink: Arc<dyn ChartSink>,
    ) -> Result<LoadHandle, BootstrapError> {
        let orchestrator = FetchOrchestrator::new(self.source.clone(), sink);

        let company_id = company_id.trim();
        if company_id.is_empty() {
            orchestrator.alert(MISSING_COMPANY_ALERT).await;
            return Err(BootstrapError::MissingCompanyId);
        }

        let handle = LoadHandle {
            handles: self
                .tasks(company_id)
                .into_iter()
                .map(|task| orchestrator.load(task))
                .collect(),
        };
        tracing::info!("Launched {} chart tasks for company {}", handle.len(), company_id);

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::orchestrator::BACKEND_DOWN_ALERT;
    use crate::application::testing::{full_payload, FakeResponse, FakeSource};
    use crate::infrastructure::sinks::ChartBoard;

    const BASE: &str = "http://backend.test/api";

    fn api() -> ApiSettings {
        ApiSettings {
            base_url: BASE.to_string(),
            ..ApiSettings::default()
        }
    }

    #[tokio::test]
    async fn test_empty_company_alerts_without_fetching() {
        let source = Arc::new(FakeSource::default().fallback(FakeResponse::Data(full_payload())));
        let board = Arc::new(ChartBoard::new());
        let bootstrap = DashboardBootstrap::new(source.clone(), api());

        for company in ["", "   "] {
            let result = bootstrap.load_all(company, board.clone()).await;
            assert_eq!(result.unwrap_err(), BootstrapError::MissingCompanyId);
        }

        assert!(source.requests().is_empty());
        assert_eq!(board.alerts().await, vec![MISSING_COMPANY_ALERT.to_string(); 2]);
    }

    #[tokio::test]
    async fn test_loads_every_chart() {
        let source = Arc::new(FakeSource::default().fallback(FakeResponse::Data(full_payload())));
        let board = Arc::new(ChartBoard::new());
        let bootstrap = DashboardBootstrap::new(source.clone(), api());

        let handle = bootstrap.load_all("00126380", board.clone()).await.unwrap();
        assert_eq!(handle.len(), 12);
        handle.join().await;

        assert_eq!(board.charts().await.len(), 12);
        assert!(board.alerts().await.is_empty());

        let requests = source.requests();
        assert_eq!(requests.len(), 12);
        let cash_flow = format!("{}/00126380/cash-flow-ttm", BASE);
        assert_eq!(requests.iter().filter(|u| **u == cash_flow).count(), 2);
    }

    #[tokio::test]
    async fn test_primary_failure_does_not_block_other_charts() {
        let source = Arc::new(
            FakeSource::default()
                .fallback(FakeResponse::Data(full_payload()))
                .respond(&format!("{}/00126380/quarterly-data", BASE), FakeResponse::Unreachable),
        );
        let board = Arc::new(ChartBoard::new());
        let bootstrap = DashboardBootstrap::new(source.clone(), api());

        bootstrap
            .load_all("00126380", board.clone())
            .await
            .unwrap()
            .join()
            .await;

        assert_eq!(source.requests().len(), 12);
        let charts = board.charts().await;
        assert_eq!(charts.len(), 11);
        assert!(charts.iter().all(|c| c.mount_id != "revenueChart"));
        assert_eq!(board.alerts().await, vec![BACKEND_DOWN_ALERT.to_string()]);
    }

    #[test]
    fn test_tasks_use_fixed_urls() {
        let source = Arc::new(FakeSource::default());
        let mut settings = api();
        settings.fixed_urls.push(crate::infrastructure::config::FixedUrl {
            chart: "capexCashFlowTTMChart".to_string(),
            url: "http://localhost:8000/api/samsung-capex-cash-flow-ttm".to_string(),
        });
        let bootstrap = DashboardBootstrap::new(source, settings);

        let tasks = bootstrap.tasks("00126380");
        let urls: Vec<_> = tasks.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls[0], "http://backend.test/api/00126380/quarterly-data");
        assert_eq!(urls[7], "http://backend.test/api/00126380/cash-flow-ttm");
        assert_eq!(urls[8], "http://localhost:8000/api/samsung-capex-cash-flow-ttm");
        assert!(tasks.iter().all(|t| t.company_id == "00126380"));
    }

    #[test]
    fn test_mount_points_follow_charts() {
        let bootstrap = DashboardBootstrap::new(Arc::new(FakeSource::default()), api())
            .with_charts(&CHARTS[..2]);
        let mounts = bootstrap.mount_points();
        assert_eq!(mounts.len(), 2);
        assert_eq!(mounts[1].mount_id, "revenueRatioChart");
    }
}
