// Application state for HTTP handlers
use crate::application::dashboard_controller::DashboardController;
use crate::infrastructure::view_state::ViewState;
use tokio::sync::Mutex;

/// One controller per process. The mutex delivers selection events one at a time.
pub struct AppState {
    pub dashboard: Mutex<DashboardController<ViewState>>,
}

impl AppState {
    pub fn new(dashboard: DashboardController<ViewState>) -> Self {
        Self {
            dashboard: Mutex::new(dashboard),
        }
    }
}
