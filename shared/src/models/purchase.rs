//! Purchase ledger models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable purchase record
///
/// Append-only ledger entry. Deleting a purchase removes the historical
/// record but never reverses its effect on ingredient quantity or cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: String,
    /// User-entered purchase date
    pub date: NaiveDate,
    pub ingredient_id: String,
    /// Ingredient name snapshot at purchase time
    pub ingredient_name: String,
    pub quantity: Decimal,
    pub unit: String,
    /// Total price paid for the whole quantity
    pub total_cost: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// Effective cost per unit of quantity for this purchase
    pub fn unit_cost(&self) -> Decimal {
        if self.quantity.is_zero() {
            Decimal::ZERO
        } else {
            self.total_cost / self.quantity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost() {
        let purchase = Purchase {
            id: "p1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            ingredient_id: "harina".to_string(),
            ingredient_name: "Harina de Trigo".to_string(),
            quantity: Decimal::from(50000),
            unit: "g".to_string(),
            total_cost: Decimal::from(190000),
            notes: None,
            created_at: Utc::now(),
        };
        assert_eq!(purchase.unit_cost(), Decimal::new(38, 1));
    }

    #[test]
    fn test_unit_cost_zero_quantity_guard() {
        let purchase = Purchase {
            id: "p2".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            ingredient_id: "sal".to_string(),
            ingredient_name: "Sal".to_string(),
            quantity: Decimal::ZERO,
            unit: "g".to_string(),
            total_cost: Decimal::from(1000),
            notes: None,
            created_at: Utc::now(),
        };
        assert_eq!(purchase.unit_cost(), Decimal::ZERO);
    }
}
