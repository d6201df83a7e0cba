// Application state for HTTP handlers
use crate::application::bootstrap::DashboardBootstrap;

#[derive(Clone)]
pub struct AppState {
    pub bootstrap: DashboardBootstrap,
}
