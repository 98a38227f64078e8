//! Ingredient models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stocked ingredient
///
/// Quantities carry a semantic unit (grams, milliliters or discrete units);
/// `cost` is the weighted-average cost per unit of quantity. For the
/// intermediate dough ingredient the stored cost is only a read-time cache:
/// the authoritative value is always derived from the current dough recipe
/// and the current raw-ingredient costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub kind: IngredientKind,
    pub quantity: Decimal,
    pub unit: String,
    pub cost: Decimal,
    pub min_threshold: Decimal,
}

/// Role of an ingredient in production
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IngredientKind {
    /// Raw material consumed when producing dough
    Base,
    /// The semi-finished dough good, produced from base ingredients
    Intermediate,
    /// Filling consumed directly by finished products
    Filling,
    /// Packaging material
    Packaging,
}

impl IngredientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientKind::Base => "base",
            IngredientKind::Intermediate => "intermediate",
            IngredientKind::Filling => "filling",
            IngredientKind::Packaging => "packaging",
        }
    }
}

impl Ingredient {
    /// Whether this is the intermediate dough good
    pub fn is_intermediate(&self) -> bool {
        self.kind == IngredientKind::Intermediate
    }

    /// Current stock value at the weighted-average cost
    pub fn stock_value(&self) -> Decimal {
        self.quantity * self.cost
    }

    /// Whether stock sits at or below the configured reorder threshold
    pub fn below_threshold(&self) -> bool {
        self.quantity <= self.min_threshold
    }
}

/// Placeholder shown when a recipe references an ingredient that no longer
/// exists (ingredient deletion is irreversible and does not cascade)
pub const UNKNOWN_INGREDIENT_NAME: &str = "Ingrediente desconocido";
