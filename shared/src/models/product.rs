//! Finished product models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A finished product (a tray of deditos, empanadas, etc.)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Sale price per tray/unit (COP)
    pub price: Decimal,
    /// Finished units on hand; manufactured units land here and sales draw
    /// from here
    #[serde(default)]
    pub stock: u32,
    pub recipe: Vec<RecipeItem>,
}

/// One ingredient requirement for a single unit of product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeItem {
    pub ingredient_id: String,
    pub quantity: Decimal,
}

impl Product {
    /// Total amount of one ingredient needed to build `count` units
    pub fn required_for(&self, ingredient_id: &str, count: u32) -> Decimal {
        self.recipe
            .iter()
            .filter(|item| item.ingredient_id == ingredient_id)
            .map(|item| item.quantity * Decimal::from(count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_for_scales_by_count() {
        let product = Product {
            id: "d_pollo".to_string(),
            name: "Dedito Pollo x6".to_string(),
            category: "Deditos".to_string(),
            price: Decimal::from(14000),
            stock: 0,
            recipe: vec![
                RecipeItem {
                    ingredient_id: "masa_base".to_string(),
                    quantity: Decimal::from(240),
                },
                RecipeItem {
                    ingredient_id: "pollo".to_string(),
                    quantity: Decimal::from(180),
                },
            ],
        };

        assert_eq!(product.required_for("masa_base", 3), Decimal::from(720));
        assert_eq!(product.required_for("pollo", 1), Decimal::from(180));
        assert_eq!(product.required_for("queso", 5), Decimal::ZERO);
    }

    #[test]
    fn test_stock_defaults_to_zero_on_legacy_records() {
        let raw = r#"{
            "id": "d_carne",
            "name": "Dedito Carne x6",
            "category": "Deditos",
            "price": "14000",
            "recipe": []
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.stock, 0);
    }
}
