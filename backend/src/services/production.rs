//! Dough production and product manufacturing service
//!
//! Explicit dough production converts raw ingredients into intermediate
//! stock and leaves a production-log entry. Manufacturing explodes a
//! product's recipe into stock deductions and, when dough runs short,
//! synthesizes the deficit instantaneously from raw materials.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{DoughRecipe, MovementKind, Product, ProductionLog};
use shared::validation::{validate_positive_quantity, validate_unit_count};

use crate::error::{AppError, AppResult};
use crate::store::{DoughConsumption, Store, StoreState};

/// Production service for dough batches and product manufacturing
#[derive(Clone)]
pub struct ProductionService {
    store: Store,
}

/// Instantaneous dough synthesis used when manufacture outruns dough stock
///
/// Same explosion primitive as explicit production, but it leaves no
/// production-log entry, emits no movements of its own and never credits
/// intermediate stock: the synthesized grams are consumed on the spot. The
/// only audit trace is the composite manufacture movement's description.
fn produce_dough_silently(state: &mut StoreState, amount: Decimal) -> Vec<DoughConsumption> {
    state.consume_dough_inputs(amount)
}

impl ProductionService {
    /// Create a new ProductionService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Current master dough formula
    pub async fn get_dough_recipe(&self) -> DoughRecipe {
        self.store.read(|state| state.dough_recipe.clone()).await
    }

    /// Replace the master dough formula
    ///
    /// The recipe is edited live; the intermediate's derived cost follows it
    /// immediately, including for dough already in stock.
    pub async fn save_dough_recipe(&self, recipe: DoughRecipe) -> AppResult<DoughRecipe> {
        if recipe.base_amount < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "base_amount".to_string(),
                message: "Reference batch size cannot be negative".to_string(),
                message_es: "La base de cálculo no puede ser negativa".to_string(),
            });
        }
        if recipe.items.iter().any(|item| item.quantity < Decimal::ZERO) {
            return Err(AppError::Validation {
                field: "items".to_string(),
                message: "Recipe quantities cannot be negative".to_string(),
                message_es: "Las cantidades de la receta no pueden ser negativas".to_string(),
            });
        }

        self.store
            .write(move |state| {
                state.dough_recipe = recipe.clone();
                state.refresh_intermediate_cost();
                Ok(recipe)
            })
            .await
    }

    /// Produce a batch of dough
    ///
    /// Deducts raw ingredients at the current recipe ratio (no shortfall
    /// check inside this primitive; the caller performs the pre-check),
    /// credits intermediate stock, logs one PRODUCTION movement per
    /// ingredient plus the batch completion, and records the batch cost.
    /// There is no rollback path.
    pub async fn produce_dough(&self, amount_grams: Decimal) -> AppResult<ProductionLog> {
        if validate_positive_quantity(amount_grams).is_err() {
            return Err(AppError::Validation {
                field: "amount_grams".to_string(),
                message: "Production amount must be positive".to_string(),
                message_es: "La cantidad a producir debe ser positiva".to_string(),
            });
        }

        self.store
            .write(move |state| {
                let consumed = state.consume_dough_inputs(amount_grams);
                let batch_cost: Decimal = consumed.iter().map(|c| c.cost).sum();

                for c in &consumed {
                    state.log_movement(
                        MovementKind::Production,
                        &c.ingredient_id,
                        c.quantity,
                        format!("Producción de masa: {} g", amount_grams),
                    );
                }

                if let Some(dough) = state.intermediate_mut() {
                    dough.quantity += amount_grams;
                    let dough_id = dough.id.clone();
                    state.log_movement(
                        MovementKind::Production,
                        &dough_id,
                        amount_grams,
                        "Producción finalizada".to_string(),
                    );
                }

                let cost_per_gram = if amount_grams.is_zero() {
                    Decimal::ZERO
                } else {
                    batch_cost / amount_grams
                };
                let log = ProductionLog {
                    id: Uuid::new_v4().to_string(),
                    date: Utc::now(),
                    amount_produced: amount_grams,
                    cost_per_gram,
                };
                state.production_logs.insert(0, log.clone());
                state.refresh_intermediate_cost();

                tracing::info!("Produced {} g of dough at {}/g", amount_grams, cost_per_gram);
                Ok(log)
            })
            .await
    }

    /// Manufacture finished units of a product
    ///
    /// For the dough recipe line: consume from intermediate stock while it
    /// lasts, then synthesize the deficit directly from raw materials. Every
    /// other line deducts its ingredient unconditionally; negative stock is
    /// a tolerated terminal state, not an error. Finishes by crediting
    /// product stock and appending one composite OUT movement.
    pub async fn manufacture_product(&self, product_id: &str, quantity: u32) -> AppResult<Product> {
        if validate_unit_count(quantity).is_err() {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be at least 1".to_string(),
                message_es: "La cantidad debe ser al menos 1".to_string(),
            });
        }

        let product_id = product_id.to_string();
        self.store
            .write(move |state| {
                let product = state
                    .product(&product_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

                let mut consumption_notes: Vec<String> = Vec::new();
                for item in &product.recipe {
                    let needed = item.quantity * Decimal::from(quantity);
                    let is_dough = state
                        .ingredient(&item.ingredient_id)
                        .map(|i| i.is_intermediate())
                        .unwrap_or(false);

                    if is_dough {
                        consumption_notes.push(consume_dough(state, &item.ingredient_id, needed));
                    } else if let Some(ing) = state.ingredient_mut(&item.ingredient_id) {
                        ing.quantity -= needed;
                        consumption_notes.push(format!("{} {} {}", needed, ing.unit, ing.name));
                    } else {
                        consumption_notes.push(format!(
                            "{} {}",
                            needed,
                            state.ingredient_name(&item.ingredient_id)
                        ));
                    }
                }

                let updated = {
                    let p = state
                        .product_mut(&product_id)
                        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
                    p.stock += quantity;
                    p.clone()
                };

                state.log_movement(
                    MovementKind::Out,
                    &product_id,
                    Decimal::from(quantity),
                    format!(
                        "Fabricación: {}x {}. Consumo: {}",
                        quantity,
                        product.name,
                        consumption_notes.join("; ")
                    ),
                );

                tracing::info!("Manufactured {}x {}", quantity, product_id);
                Ok(updated)
            })
            .await
    }

    /// Production history, newest first
    pub async fn list_production_logs(&self) -> Vec<ProductionLog> {
        self.store.read(|state| state.production_logs.clone()).await
    }

    /// Clear the production history
    pub async fn clear_production_logs(&self) -> AppResult<()> {
        self.store
            .write(|state| {
                state.production_logs.clear();
                Ok(())
            })
            .await
    }
}

/// Consume `needed` grams of dough for manufacture, draining stock first and
/// synthesizing any deficit from raw materials; returns the audit note
fn consume_dough(state: &mut StoreState, dough_id: &str, needed: Decimal) -> String {
    let available = state
        .ingredient(dough_id)
        .map(|i| i.quantity)
        .unwrap_or(Decimal::ZERO);

    if available >= needed {
        if let Some(dough) = state.ingredient_mut(dough_id) {
            dough.quantity -= needed;
        }
        return format!("{} g de masa de stock", needed);
    }

    let deficit = needed - available;
    if let Some(dough) = state.ingredient_mut(dough_id) {
        dough.quantity = Decimal::ZERO;
    }
    let consumed = produce_dough_silently(state, deficit);
    let detail: Vec<String> = consumed
        .iter()
        .map(|c| format!("{} {} {}", c.quantity, c.unit, c.name))
        .collect();
    format!(
        "{} g de masa de stock + {} g producidos al instante ({})",
        available,
        deficit,
        detail.join(", ")
    )
}
