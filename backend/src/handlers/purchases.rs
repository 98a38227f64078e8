//! HTTP handlers for the purchase ledger

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::Purchase;
use crate::services::purchasing::{PurchaseService, RecordPurchaseInput};
use crate::AppState;

/// Record a purchase
pub async fn record_purchase(
    State(state): State<AppState>,
    Json(input): Json<RecordPurchaseInput>,
) -> AppResult<Json<Purchase>> {
    let service = PurchaseService::new(state.store);
    let purchase = service.record_purchase(input).await?;
    Ok(Json(purchase))
}

/// List purchases, newest first
pub async fn list_purchases(State(state): State<AppState>) -> Json<Vec<Purchase>> {
    let service = PurchaseService::new(state.store);
    Json(service.list_purchases().await)
}

/// Delete a purchase record (stock and cost are not reverted)
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<String>,
) -> AppResult<Json<()>> {
    let service = PurchaseService::new(state.store);
    service.delete_purchase(&purchase_id).await?;
    Ok(Json(()))
}
