// HTTP request handlers
use crate::application::dashboard_controller::{DashboardController, DashboardError};
use crate::application::view::SelectorOption;
use crate::domain::chart::{ChartDescription, ChartRegion};
use crate::infrastructure::view_state::{DashboardSnapshot, DashboardStatus, ViewState};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SelectionRequest {
    pub id: String,
}

fn snapshot(dashboard: &DashboardController<ViewState>) -> DashboardSnapshot {
    let status = if dashboard.is_loaded() {
        DashboardStatus::Loaded
    } else {
        DashboardStatus::Unloaded
    };
    dashboard.view().snapshot(status)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Everything currently displayed
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    let dashboard = state.dashboard.lock().await;
    Json(snapshot(&dashboard))
}

/// Selector options in dataset order
pub async fn list_subjects(State(state): State<Arc<AppState>>) -> Json<Vec<SelectorOption>> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view().selector_options().to_vec())
}

/// The chart currently plotted in one region
pub async fn get_chart(
    Path(region): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartDescription>, StatusCode> {
    let region: ChartRegion = region.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let dashboard = state.dashboard.lock().await;
    dashboard
        .view()
        .chart(region)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Selector change: set the value and re-render
pub async fn select_subject(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<DashboardSnapshot>, StatusCode> {
    let mut dashboard = state.dashboard.lock().await;
    if !dashboard.is_loaded() {
        return Err(StatusCode::CONFLICT);
    }
    if !dashboard.view_mut().select(&request.id) {
        return Err(StatusCode::NOT_FOUND);
    }

    match dashboard.on_selection_change() {
        Ok(outcome) => {
            tracing::debug!(
                "Selection {} applied (charts: {}, demographics: {})",
                request.id,
                outcome.charts_updated,
                outcome.demographics_updated
            );
            Ok(Json(snapshot(&dashboard)))
        }
        Err(DashboardError::NotLoaded) => Err(StatusCode::CONFLICT),
        Err(e) => {
            tracing::error!("Error rendering subject {}: {:?}", request.id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
