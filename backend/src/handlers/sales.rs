//! HTTP handlers for sale registration and history

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::Sale;
use crate::services::sales::{RecordSaleInput, SalesService};
use crate::AppState;

/// Record a sale (pre-flight feasibility check, then commit)
pub async fn record_sale(
    State(state): State<AppState>,
    Json(input): Json<RecordSaleInput>,
) -> AppResult<Json<Sale>> {
    let service = SalesService::new(state.store);
    let sale = service.record_sale(input).await?;
    Ok(Json(sale))
}

/// List sales, newest first
pub async fn list_sales(State(state): State<AppState>) -> Json<Vec<Sale>> {
    let service = SalesService::new(state.store);
    Json(service.list_sales().await)
}

/// Delete a sale, restoring its finished-product stock
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<String>,
) -> AppResult<Json<()>> {
    let service = SalesService::new(state.store);
    service.delete_sale(&sale_id).await?;
    Ok(Json(()))
}
