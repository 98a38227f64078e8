//! HTTP handlers for dough production and product manufacturing

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{DoughRecipe, Product, ProductionLog};
use crate::services::ProductionService;
use crate::AppState;

/// Request to produce a batch of dough
#[derive(Debug, Deserialize)]
pub struct ProduceDoughRequest {
    pub amount_grams: Decimal,
}

/// Request to manufacture finished units of a product
#[derive(Debug, Deserialize)]
pub struct ManufactureRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Current master dough formula
pub async fn get_dough_recipe(State(state): State<AppState>) -> Json<DoughRecipe> {
    let service = ProductionService::new(state.store);
    Json(service.get_dough_recipe().await)
}

/// Replace the master dough formula
pub async fn save_dough_recipe(
    State(state): State<AppState>,
    Json(recipe): Json<DoughRecipe>,
) -> AppResult<Json<DoughRecipe>> {
    let service = ProductionService::new(state.store);
    let saved = service.save_dough_recipe(recipe).await?;
    Ok(Json(saved))
}

/// Produce a batch of dough
pub async fn produce_dough(
    State(state): State<AppState>,
    Json(request): Json<ProduceDoughRequest>,
) -> AppResult<Json<ProductionLog>> {
    let service = ProductionService::new(state.store);
    let log = service.produce_dough(request.amount_grams).await?;
    Ok(Json(log))
}

/// Manufacture finished units of a product
pub async fn manufacture_product(
    State(state): State<AppState>,
    Json(request): Json<ManufactureRequest>,
) -> AppResult<Json<Product>> {
    let service = ProductionService::new(state.store);
    let product = service
        .manufacture_product(&request.product_id, request.quantity)
        .await?;
    Ok(Json(product))
}

/// Production history, newest first
pub async fn list_production_logs(State(state): State<AppState>) -> Json<Vec<ProductionLog>> {
    let service = ProductionService::new(state.store);
    Json(service.list_production_logs().await)
}

/// Clear the production history
pub async fn clear_production_logs(State(state): State<AppState>) -> AppResult<Json<()>> {
    let service = ProductionService::new(state.store);
    service.clear_production_logs().await?;
    Ok(Json(()))
}
