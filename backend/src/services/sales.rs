//! Sale processing service: feasibility pre-flight, commit, history

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::models::{MovementKind, Sale, UNKNOWN_INGREDIENT_NAME};
use shared::validation::validate_unit_count;

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Sales service for registering and deleting sale transactions
#[derive(Clone)]
pub struct SalesService {
    store: Store,
}

/// Input for recording a sale
#[derive(Debug, Deserialize)]
pub struct RecordSaleInput {
    pub product_id: String,
    pub quantity: u32,
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Record a sale
    ///
    /// Pre-flight first: every recipe line must be coverable from current
    /// ingredient stock, and a dough shortage is reported distinctly from a
    /// generic one so the caller can redirect the user to production. A sale
    /// never synthesizes dough from raw materials; that convenience exists
    /// only in manufacturing. On rejection nothing is mutated.
    ///
    /// Commit captures the price at sale time and draws down finished
    /// product stock; ingredient stock was already consumed by manufacture.
    pub async fn record_sale(&self, input: RecordSaleInput) -> AppResult<Sale> {
        if validate_unit_count(input.quantity).is_err() {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be at least 1".to_string(),
                message_es: "La cantidad debe ser al menos 1".to_string(),
            });
        }

        self.store
            .write(move |state| {
                let product = state
                    .product(&input.product_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

                // Pre-flight: reject before any mutation.
                for item in &product.recipe {
                    let needed = product.required_for(&item.ingredient_id, input.quantity);
                    let ing = state.ingredient(&item.ingredient_id);
                    let available = ing.map(|i| i.quantity).unwrap_or(Decimal::ZERO);
                    if available < needed {
                        let missing = needed - available;
                        return Err(match ing {
                            Some(i) if i.is_intermediate() => {
                                AppError::InsufficientDough { missing }
                            }
                            Some(i) => AppError::InsufficientStock {
                                ingredient: i.name.clone(),
                                missing,
                                unit: i.unit.clone(),
                            },
                            None => AppError::InsufficientStock {
                                ingredient: UNKNOWN_INGREDIENT_NAME.to_string(),
                                missing,
                                unit: String::new(),
                            },
                        });
                    }
                }

                let sale = Sale {
                    id: Uuid::new_v4().to_string(),
                    product_id: input.product_id.clone(),
                    quantity: input.quantity,
                    total: product.price * Decimal::from(input.quantity),
                    created_at: Utc::now(),
                };
                state.sales.push(sale.clone());

                if let Some(p) = state.product_mut(&input.product_id) {
                    p.stock = p.stock.saturating_sub(input.quantity);
                }

                state.log_movement(
                    MovementKind::Out,
                    &input.product_id,
                    Decimal::from(input.quantity),
                    format!("Venta: {}x {}", input.quantity, product.name),
                );

                tracing::info!("Sale recorded: {}x {}", input.quantity, input.product_id);
                Ok(sale)
            })
            .await
    }

    /// List sales, newest first
    pub async fn list_sales(&self) -> Vec<Sale> {
        self.store
            .read(|state| {
                let mut sales = state.sales.clone();
                sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                sales
            })
            .await
    }

    /// Delete a sale
    ///
    /// Restores the finished-product stock the sale drew down. Ingredient
    /// deductions belong to manufacturing and are not touched.
    pub async fn delete_sale(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .write(move |state| {
                let position = state
                    .sales
                    .iter()
                    .position(|s| s.id == id)
                    .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;
                let sale = state.sales.remove(position);
                if let Some(product) = state.product_mut(&sale.product_id) {
                    product.stock += sale.quantity;
                }
                Ok(())
            })
            .await
    }
}
