// HTTP request handlers
use crate::domain::dashboard::{DashboardEvent, MountPoint};
use crate::infrastructure::ndjson_stream::stream_from_receiver;
use crate::infrastructure::sinks::{ChannelSink, ChartBoard};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Mount points the page has to provide
pub async fn list_charts(State(state): State<Arc<AppState>>) -> Json<Vec<MountPoint>> {
    Json(state.bootstrap.mount_points())
}

/// Dashboard for the configured default company
pub async fn default_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let company_id = state.bootstrap.default_company().unwrap_or_default().to_string();
    render_dashboard(&state, &company_id).await
}

/// Every chart for one company, once all loads have finished
pub async fn get_dashboard(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    render_dashboard(&state, &company_id).await
}

async fn render_dashboard(state: &AppState, company_id: &str) -> Response {
    let board = Arc::new(ChartBoard::new());

    match state.bootstrap.load_all(company_id, board.clone()).await {
        Ok(handle) => {
            handle.join().await;
            Json(board.snapshot(company_id.trim()).await).into_response()
        }
        Err(e) => {
            let alerts = board.alerts().await;
            let body = json!({ "error": e.to_string(), "alerts": alerts });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

/// Stream charts for one company as they become ready (progressive loading)
pub async fn stream_dashboard(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let (tx, rx) = mpsc::channel(32);

    if !company_id.trim().is_empty() {
        let skeleton = DashboardEvent::Skeleton {
            company_id: company_id.trim().to_string(),
            started_at: chrono::Utc::now(),
            mounts: state.bootstrap.mount_points(),
        };
        let _ = tx.send(skeleton).await;
    }

    // Tasks keep their own sender clones; the stream ends when the last one finishes
    let sink = Arc::new(ChannelSink::new(tx));
    if let Err(e) = state.bootstrap.load_all(&company_id, sink).await {
        tracing::warn!("Not streaming dashboard: {}", e);
    }

    stream_from_receiver(rx)
}

#[cfg(test)]
mod tests {
    use crate::application::bootstrap::{DashboardBootstrap, MISSING_COMPANY_ALERT};
    use crate::application::testing::{full_payload, FakeResponse, FakeSource};
    use crate::build_router;
    use crate::infrastructure::config::ApiSettings;
    use crate::presentation::app_state::AppState;
    use std::sync::Arc;

    async fn serve(source: FakeSource) -> String {
        let bootstrap = DashboardBootstrap::new(Arc::new(source), ApiSettings::default());
        let router = build_router(Arc::new(AppState { bootstrap }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_dashboard_snapshot() {
        let base = serve(FakeSource::default().fallback(FakeResponse::Data(full_payload()))).await;

        let body: serde_json::Value = reqwest::get(format!("{}/dashboards/00126380", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["companyId"], "00126380");
        assert_eq!(body["charts"].as_array().unwrap().len(), 12);
        assert!(body["alerts"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_company_is_bad_request() {
        let source = FakeSource::default();
        let base = serve(source).await;

        // No default company configured
        let response = reqwest::get(format!("{}/dashboards", base)).await.unwrap();
        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["alerts"][0], MISSING_COMPANY_ALERT);
    }

    #[tokio::test]
    async fn test_stream_sends_skeleton_then_charts() {
        let base = serve(FakeSource::default().fallback(FakeResponse::Data(full_payload()))).await;

        let text = reqwest::get(format!("{}/dashboards/00126380/stream", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let events: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

        assert_eq!(events.len(), 13);
        assert_eq!(events[0]["type"], "skeleton");
        assert_eq!(events[0]["companyId"], "00126380");
        assert_eq!(events[0]["mounts"].as_array().unwrap().len(), 12);
        assert!(events[1..].iter().all(|e| e["type"] == "chart"));
    }

    #[tokio::test]
    async fn test_list_charts() {
        let base = serve(FakeSource::default()).await;

        let body: serde_json::Value = reqwest::get(format!("{}/charts", base)).await.unwrap().json().await.unwrap();
        assert_eq!(body[0]["mountId"], "revenueChart");
        assert_eq!(body[0]["endpoint"], "quarterly-data");
    }
}
