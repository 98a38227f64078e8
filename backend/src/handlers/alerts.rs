//! HTTP handlers for stock alerts

use axum::{extract::State, Json};

use crate::models::StockAlert;
use crate::services::AlertService;
use crate::AppState;

/// Project low-stock alerts for every ingredient
pub async fn list_alerts(State(state): State<AppState>) -> Json<Vec<StockAlert>> {
    let service = AlertService::new(state.store);
    Json(service.list_alerts().await)
}
