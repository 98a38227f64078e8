//! Stock alert projection
//!
//! A pure, side-effect-free read model over ingredients, products and sales.
//! Safe to recompute at any frequency; always reflects current state.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Ingredient, Product, Sale};

/// Days of trailing sales history used to estimate consumption velocity
const CONSUMPTION_WINDOW_DAYS: i64 = 7;

/// Dough stock below this is critical (2 kg)
const DOUGH_CRITICAL_GRAMS: i64 = 2000;
/// Dough stock below this is a warning (5 kg)
const DOUGH_WARNING_GRAMS: i64 = 5000;

/// Projected stock health for one ingredient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockAlert {
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub current_stock: Decimal,
    /// Projected days until depletion at the trailing consumption rate
    pub days_remaining: i64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Ok,
    Warning,
    Critical,
}

/// Project alerts for every ingredient from the trailing sales window
///
/// Consumption is attributed through product recipes: each sale in the
/// window consumes `recipe quantity × sale quantity` of every recipe
/// ingredient. The dough ingredient is classified by absolute stock level
/// alone; everything else combines its reorder threshold with projected
/// runway. Result is sorted critical-first, then by ascending runway.
pub fn project_alerts(
    ingredients: &[Ingredient],
    products: &[Product],
    sales: &[Sale],
    now: DateTime<Utc>,
) -> Vec<StockAlert> {
    let window_start = now - Duration::days(CONSUMPTION_WINDOW_DAYS);

    let mut weekly_consumption: HashMap<&str, Decimal> = HashMap::new();
    for sale in sales.iter().filter(|s| s.created_at >= window_start) {
        let Some(product) = products.iter().find(|p| p.id == sale.product_id) else {
            continue;
        };
        for item in &product.recipe {
            *weekly_consumption
                .entry(item.ingredient_id.as_str())
                .or_insert(Decimal::ZERO) += item.quantity * Decimal::from(sale.quantity);
        }
    }

    let mut alerts: Vec<StockAlert> = ingredients
        .iter()
        .map(|ing| {
            let weekly = weekly_consumption
                .get(ing.id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            // Floor keeps unsold ingredients from projecting infinite runway.
            let daily = (weekly / Decimal::from(CONSUMPTION_WINDOW_DAYS)).max(Decimal::new(1, 1));
            let days_remaining = (ing.quantity / daily)
                .floor()
                .to_i64()
                .unwrap_or(i64::MAX);

            let status = if ing.is_intermediate() {
                classify_dough(ing.quantity)
            } else {
                classify_ingredient(ing, days_remaining)
            };

            StockAlert {
                ingredient_id: ing.id.clone(),
                ingredient_name: ing.name.clone(),
                current_stock: ing.quantity,
                days_remaining,
                status,
            }
        })
        .collect();

    alerts.sort_by(|a, b| {
        use std::cmp::Ordering;
        match (
            a.status == StockStatus::Critical,
            b.status == StockStatus::Critical,
        ) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.days_remaining.cmp(&b.days_remaining),
        }
    });
    alerts
}

/// Dough is classified by absolute stock level; sales velocity is ignored
fn classify_dough(quantity: Decimal) -> StockStatus {
    if quantity < Decimal::from(DOUGH_CRITICAL_GRAMS) {
        StockStatus::Critical
    } else if quantity < Decimal::from(DOUGH_WARNING_GRAMS) {
        StockStatus::Warning
    } else {
        StockStatus::Ok
    }
}

fn classify_ingredient(ing: &Ingredient, days_remaining: i64) -> StockStatus {
    if ing.below_threshold() || days_remaining < 2 {
        StockStatus::Critical
    } else if days_remaining < 5 {
        StockStatus::Warning
    } else {
        StockStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientKind, RecipeItem};

    fn ingredient(id: &str, kind: IngredientKind, quantity: i64, threshold: i64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            quantity: Decimal::from(quantity),
            unit: "g".to_string(),
            cost: Decimal::ONE,
            min_threshold: Decimal::from(threshold),
        }
    }

    fn product_using(id: &str, ingredient_id: &str, per_unit: i64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            category: "Deditos".to_string(),
            price: Decimal::from(14000),
            stock: 0,
            recipe: vec![RecipeItem {
                ingredient_id: ingredient_id.to_string(),
                quantity: Decimal::from(per_unit),
            }],
        }
    }

    fn sale_of(product_id: &str, quantity: u32, now: DateTime<Utc>, days_ago: i64) -> Sale {
        Sale {
            id: format!("s-{product_id}-{days_ago}"),
            product_id: product_id.to_string(),
            quantity,
            total: Decimal::from(14000) * Decimal::from(quantity),
            created_at: now - Duration::days(days_ago),
        }
    }

    #[test]
    fn test_dough_thresholds_ignore_velocity() {
        let now = Utc::now();
        for (qty, expected) in [
            (1999, StockStatus::Critical),
            (4999, StockStatus::Warning),
            (5000, StockStatus::Ok),
        ] {
            let ingredients = [ingredient("masa_base", IngredientKind::Intermediate, qty, 2000)];
            let alerts = project_alerts(&ingredients, &[], &[], now);
            assert_eq!(alerts[0].status, expected, "dough at {qty}g");
        }
    }

    #[test]
    fn test_threshold_hit_is_critical_regardless_of_runway() {
        let now = Utc::now();
        // No sales at all, so runway is huge; the threshold rule still fires.
        let ingredients = [ingredient("sal", IngredientKind::Base, 500, 500)];
        let alerts = project_alerts(&ingredients, &[], &[], now);
        assert_eq!(alerts[0].status, StockStatus::Critical);
    }

    #[test]
    fn test_runway_from_trailing_week() {
        let now = Utc::now();
        let ingredients = [ingredient("pollo", IngredientKind::Filling, 700, 10)];
        let products = [product_using("d_pollo", "pollo", 100)];
        // 7 units over the window: 700 g weekly, 100 g daily, 7 days left.
        let sales = vec![
            sale_of("d_pollo", 3, now, 1),
            sale_of("d_pollo", 4, now, 6),
        ];
        let alerts = project_alerts(&ingredients, &products, &sales, now);
        assert_eq!(alerts[0].days_remaining, 7);
        assert_eq!(alerts[0].status, StockStatus::Ok);
    }

    #[test]
    fn test_sales_outside_window_are_ignored() {
        let now = Utc::now();
        let ingredients = [ingredient("pollo", IngredientKind::Filling, 700, 10)];
        let products = [product_using("d_pollo", "pollo", 100)];
        let sales = vec![sale_of("d_pollo", 50, now, 8)];
        let alerts = project_alerts(&ingredients, &products, &sales, now);
        // Old sale ignored; consumption floor 0.1/day gives 7000 days.
        assert_eq!(alerts[0].days_remaining, 7000);
    }

    #[test]
    fn test_short_runway_statuses() {
        let now = Utc::now();
        let products = [product_using("d_pollo", "pollo", 100)];
        // 1400 g weekly -> 200 g/day.
        let sales = vec![sale_of("d_pollo", 14, now, 2)];

        let critical = [ingredient("pollo", IngredientKind::Filling, 300, 10)];
        assert_eq!(
            project_alerts(&critical, &products, &sales, now)[0].status,
            StockStatus::Critical
        );

        let warning = [ingredient("pollo", IngredientKind::Filling, 800, 10)];
        assert_eq!(
            project_alerts(&warning, &products, &sales, now)[0].status,
            StockStatus::Warning
        );

        let ok = [ingredient("pollo", IngredientKind::Filling, 1100, 10)];
        assert_eq!(
            project_alerts(&ok, &products, &sales, now)[0].status,
            StockStatus::Ok
        );
    }

    #[test]
    fn test_sort_critical_first_then_runway() {
        let now = Utc::now();
        let products = [product_using("d_pollo", "pollo", 100)];
        let sales = vec![sale_of("d_pollo", 14, now, 2)];
        let ingredients = [
            ingredient("agua", IngredientKind::Base, 100000, 1000),
            ingredient("pollo", IngredientKind::Filling, 100, 10),
            ingredient("masa_base", IngredientKind::Intermediate, 100, 2000),
        ];
        let alerts = project_alerts(&ingredients, &products, &sales, now);
        assert_eq!(alerts[0].status, StockStatus::Critical);
        assert_eq!(alerts[1].status, StockStatus::Critical);
        assert!(alerts[0].days_remaining <= alerts[1].days_remaining);
        assert_eq!(alerts[2].ingredient_id, "agua");
    }

    #[test]
    fn test_deleted_product_sales_are_skipped() {
        let now = Utc::now();
        let ingredients = [ingredient("pollo", IngredientKind::Filling, 700, 10)];
        let sales = vec![sale_of("ghost", 100, now, 1)];
        let alerts = project_alerts(&ingredients, &[], &sales, now);
        assert_eq!(alerts[0].status, StockStatus::Ok);
    }
}
