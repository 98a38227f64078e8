//! Ingredient inventory service: catalog maintenance, stock adjustments,
//! the movement audit log, and supplier-invoice merging

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::models::{Ingredient, IngredientKind, InventoryMovement};
use shared::types::InvoiceItem;
use shared::validation::{normalize_invoice_unit, validate_min_threshold, validate_non_negative_cost};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Reorder threshold assigned to ingredients created from invoice lines
const DEFAULT_MIN_THRESHOLD: i64 = 100;

/// Inventory service for managing the ingredient catalog
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

/// Outcome of merging a batch of invoice line items
#[derive(Debug, Default, Serialize)]
pub struct InvoiceMergeSummary {
    /// Names of existing ingredients whose stock was increased
    pub updated: Vec<String>,
    /// Names of ingredients created for unmatched lines
    pub created: Vec<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all ingredients
    ///
    /// Side-effecting read: the intermediate's cached cost is refreshed from
    /// the current recipe and raw costs before the list is returned, so the
    /// stored value can never drift from the derived one.
    pub async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        self.store
            .write(|state| {
                state.refresh_intermediate_cost();
                Ok(state.ingredients.clone())
            })
            .await
    }

    /// Insert or replace an ingredient
    ///
    /// Whatever cost the caller supplies for the intermediate is discarded:
    /// its cost is recomputed from the recipe after every write.
    pub async fn save_ingredient(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        if ingredient.id.trim().is_empty() {
            return Err(AppError::Validation {
                field: "id".to_string(),
                message: "Ingredient id is required".to_string(),
                message_es: "El identificador del insumo es obligatorio".to_string(),
            });
        }
        if ingredient.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Ingredient name is required".to_string(),
                message_es: "El nombre del insumo es obligatorio".to_string(),
            });
        }
        if ingredient.quantity < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity cannot be negative".to_string(),
                message_es: "La cantidad no puede ser negativa".to_string(),
            });
        }
        if validate_non_negative_cost(ingredient.cost).is_err() {
            return Err(AppError::Validation {
                field: "cost".to_string(),
                message: "Cost cannot be negative".to_string(),
                message_es: "El costo no puede ser negativo".to_string(),
            });
        }
        if validate_min_threshold(ingredient.min_threshold).is_err() {
            return Err(AppError::Validation {
                field: "min_threshold".to_string(),
                message: "Reorder threshold cannot be negative".to_string(),
                message_es: "El umbral de alerta no puede ser negativo".to_string(),
            });
        }

        self.store
            .write(move |state| {
                let id = ingredient.id.clone();
                match state.ingredient_mut(&id) {
                    Some(existing) => *existing = ingredient,
                    None => state.ingredients.push(ingredient),
                }
                state.refresh_intermediate_cost();
                state
                    .ingredient(&id)
                    .cloned()
                    .ok_or_else(|| AppError::Internal("ingredient vanished after save".to_string()))
            })
            .await
    }

    /// Delete an ingredient
    ///
    /// Irreversible and non-cascading: recipes keep referencing the id and
    /// display paths degrade to a placeholder name.
    pub async fn delete_ingredient(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .write(move |state| {
                let before = state.ingredients.len();
                state.ingredients.retain(|i| i.id != id);
                if state.ingredients.len() == before {
                    return Err(AppError::NotFound("Ingredient".to_string()));
                }
                tracing::info!("Deleted ingredient {}", id);
                Ok(())
            })
            .await
    }

    /// Adjust an ingredient's stock by a signed delta
    ///
    /// Raw primitive used by the engine and the invoice merge; performs no
    /// shortfall check.
    pub async fn update_stock(&self, id: &str, delta: Decimal) -> AppResult<Ingredient> {
        let id = id.to_string();
        self.store
            .write(move |state| {
                let ing = state
                    .ingredient_mut(&id)
                    .ok_or_else(|| AppError::NotFound("Ingredient".to_string()))?;
                ing.quantity += delta;
                Ok(ing.clone())
            })
            .await
    }

    /// Full movement audit log
    pub async fn list_movements(&self) -> Vec<InventoryMovement> {
        self.store.read(|state| state.movements.clone()).await
    }

    /// Merge OCR-extracted invoice lines into the ingredient catalog
    ///
    /// Lines match existing ingredients by case-insensitive substring on the
    /// name; matched lines add stock, unmatched lines become new base
    /// ingredients with a default reorder threshold.
    pub async fn merge_invoice_items(
        &self,
        items: Vec<InvoiceItem>,
    ) -> AppResult<InvoiceMergeSummary> {
        self.store
            .write(move |state| {
                let mut summary = InvoiceMergeSummary::default();
                for item in items {
                    let (unit, quantity) = normalize_invoice_unit(&item.unit, item.quantity);
                    let needle = item.name.to_lowercase();
                    let existing_id = state
                        .ingredients
                        .iter()
                        .find(|i| i.name.to_lowercase().contains(&needle))
                        .map(|i| i.id.clone());

                    match existing_id {
                        Some(id) => {
                            if let Some(ing) = state.ingredient_mut(&id) {
                                ing.quantity += quantity;
                                summary.updated.push(ing.name.clone());
                            }
                        }
                        None => {
                            state.ingredients.push(Ingredient {
                                id: Uuid::new_v4().to_string(),
                                name: item.name.clone(),
                                kind: IngredientKind::Base,
                                quantity,
                                unit,
                                cost: item.cost,
                                min_threshold: Decimal::from(DEFAULT_MIN_THRESHOLD),
                            });
                            summary.created.push(item.name);
                        }
                    }
                }
                tracing::info!(
                    "Invoice merge: {} updated, {} created",
                    summary.updated.len(),
                    summary.created.len()
                );
                Ok(summary)
            })
            .await
    }
}
