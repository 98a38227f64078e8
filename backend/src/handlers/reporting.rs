//! HTTP handlers for the business dashboard

use axum::{extract::State, Json};

use crate::services::reporting::{DashboardMetrics, ReportingService};
use crate::AppState;

/// Compute dashboard metrics from current state
pub async fn get_dashboard_metrics(State(state): State<AppState>) -> Json<DashboardMetrics> {
    let service = ReportingService::new(state.store);
    Json(service.dashboard_metrics().await)
}
