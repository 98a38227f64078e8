//! HTTP handlers for the finished-product catalog

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::Product;
use crate::services::ProductService;
use crate::AppState;

/// Request to set a product's finished stock
#[derive(Debug, Deserialize)]
pub struct UpdateProductStockRequest {
    pub stock: i64,
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let service = ProductService::new(state.store);
    Json(service.list_products().await)
}

/// Insert or replace a product
pub async fn save_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store);
    let saved = service.save_product(product).await?;
    Ok(Json(saved))
}

/// Set a product's finished stock (clamped at zero)
pub async fn update_product_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(request): Json<UpdateProductStockRequest>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store);
    let updated = service
        .update_product_stock(&product_id, request.stock)
        .await?;
    Ok(Json(updated))
}
