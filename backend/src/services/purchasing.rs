//! Purchase ledger service and weighted-average cost folding

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::costing::weighted_average_cost;
use shared::models::{MovementKind, Purchase};
use shared::validation::{validate_non_negative_cost, validate_positive_quantity};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Purchase service for the append-only purchase ledger
#[derive(Clone)]
pub struct PurchaseService {
    store: Store,
}

/// Input for recording a purchase
#[derive(Debug, Deserialize)]
pub struct RecordPurchaseInput {
    pub ingredient_id: String,
    pub quantity: Decimal,
    /// Total price paid for the whole quantity
    pub total_cost: Decimal,
    /// Defaults to the ingredient's stock unit
    pub unit: Option<String>,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Record a purchase: fold its cost into the weighted average, add the
    /// stock, and append the ledger entry plus an IN movement
    ///
    /// Replaying the same purchase is NOT idempotent; every call permanently
    /// mutates quantity and cost.
    pub async fn record_purchase(&self, input: RecordPurchaseInput) -> AppResult<Purchase> {
        if validate_positive_quantity(input.quantity).is_err() {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be positive".to_string(),
                message_es: "La cantidad debe ser positiva".to_string(),
            });
        }
        if validate_non_negative_cost(input.total_cost).is_err() {
            return Err(AppError::Validation {
                field: "total_cost".to_string(),
                message: "Total cost cannot be negative".to_string(),
                message_es: "El costo total no puede ser negativo".to_string(),
            });
        }

        self.store
            .write(move |state| {
                let ing = state
                    .ingredient_mut(&input.ingredient_id)
                    .ok_or_else(|| AppError::NotFound("Ingredient".to_string()))?;

                ing.cost = weighted_average_cost(
                    ing.quantity,
                    ing.cost,
                    input.quantity,
                    input.total_cost,
                );
                ing.quantity += input.quantity;

                let ingredient_name = ing.name.clone();
                let unit = input.unit.unwrap_or_else(|| ing.unit.clone());
                let date = input.date.unwrap_or_else(|| Utc::now().date_naive());

                let purchase = Purchase {
                    id: Uuid::new_v4().to_string(),
                    date,
                    ingredient_id: input.ingredient_id.clone(),
                    ingredient_name,
                    quantity: input.quantity,
                    unit: unit.clone(),
                    total_cost: input.total_cost,
                    notes: input.notes,
                    created_at: Utc::now(),
                };
                state.purchases.push(purchase.clone());

                state.log_movement(
                    MovementKind::In,
                    &input.ingredient_id,
                    input.quantity,
                    format!("Compra: {} {}", input.quantity, unit),
                );

                tracing::info!(
                    "Purchase recorded: {} {} of {}",
                    input.quantity,
                    unit,
                    input.ingredient_id
                );
                Ok(purchase)
            })
            .await
    }

    /// List purchases, newest first
    pub async fn list_purchases(&self) -> Vec<Purchase> {
        self.store
            .read(|state| {
                let mut purchases = state.purchases.clone();
                purchases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                purchases
            })
            .await
    }

    /// Delete a purchase record
    ///
    /// Removes the record from history only. Stock and cost are never
    /// reverted: the weighted average cannot be unwound without replaying
    /// the whole ledger, and stock may already be consumed.
    pub async fn delete_purchase(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .write(move |state| {
                let before = state.purchases.len();
                state.purchases.retain(|p| p.id != id);
                if state.purchases.len() == before {
                    return Err(AppError::NotFound("Purchase".to_string()));
                }
                Ok(())
            })
            .await
    }
}
