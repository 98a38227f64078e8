//! Finished-product catalog service

use rust_decimal::Decimal;

use shared::models::Product;

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Product service for catalog and finished-stock maintenance
#[derive(Clone)]
pub struct ProductService {
    store: Store,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all products
    pub async fn list_products(&self) -> Vec<Product> {
        self.store.read(|state| state.products.clone()).await
    }

    /// Insert or replace a product
    pub async fn save_product(&self, product: Product) -> AppResult<Product> {
        if product.id.trim().is_empty() {
            return Err(AppError::Validation {
                field: "id".to_string(),
                message: "Product id is required".to_string(),
                message_es: "El identificador del producto es obligatorio".to_string(),
            });
        }
        if product.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Product name is required".to_string(),
                message_es: "El nombre del producto es obligatorio".to_string(),
            });
        }
        if product.price < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "price".to_string(),
                message: "Price cannot be negative".to_string(),
                message_es: "El precio no puede ser negativo".to_string(),
            });
        }

        self.store
            .write(move |state| {
                match state.product_mut(&product.id) {
                    Some(existing) => *existing = product.clone(),
                    None => state.products.push(product.clone()),
                }
                Ok(product)
            })
            .await
    }

    /// Set a product's finished stock, clamped at zero
    pub async fn update_product_stock(&self, id: &str, new_stock: i64) -> AppResult<Product> {
        let id = id.to_string();
        self.store
            .write(move |state| {
                let product = state
                    .product_mut(&id)
                    .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
                product.stock = new_stock.max(0) as u32;
                Ok(product.clone())
            })
            .await
    }
}
