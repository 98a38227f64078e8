//! HTTP handlers for ingredient and movement endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{Ingredient, InventoryMovement};
use crate::services::InventoryService;
use crate::AppState;

/// Request to adjust an ingredient's stock by a signed delta
#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub delta: Decimal,
}

/// List all ingredients (refreshes the dough's derived cost)
pub async fn list_ingredients(State(state): State<AppState>) -> AppResult<Json<Vec<Ingredient>>> {
    let service = InventoryService::new(state.store);
    let ingredients = service.list_ingredients().await?;
    Ok(Json(ingredients))
}

/// Insert or replace an ingredient
pub async fn save_ingredient(
    State(state): State<AppState>,
    Json(ingredient): Json<Ingredient>,
) -> AppResult<Json<Ingredient>> {
    let service = InventoryService::new(state.store);
    let saved = service.save_ingredient(ingredient).await?;
    Ok(Json(saved))
}

/// Delete an ingredient (irreversible, non-cascading)
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<String>,
) -> AppResult<Json<()>> {
    let service = InventoryService::new(state.store);
    service.delete_ingredient(&ingredient_id).await?;
    Ok(Json(()))
}

/// Adjust an ingredient's stock by a signed delta
pub async fn update_ingredient_stock(
    State(state): State<AppState>,
    Path(ingredient_id): Path<String>,
    Json(request): Json<UpdateStockRequest>,
) -> AppResult<Json<Ingredient>> {
    let service = InventoryService::new(state.store);
    let updated = service.update_stock(&ingredient_id, request.delta).await?;
    Ok(Json(updated))
}

/// Full movement audit log
pub async fn list_movements(State(state): State<AppState>) -> Json<Vec<InventoryMovement>> {
    let service = InventoryService::new(state.store);
    Json(service.list_movements().await)
}
