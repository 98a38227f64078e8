//! Sale models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sale transaction of `quantity` units of a product
///
/// `total` captures the price at sale time; it is never recomputed when the
/// product's price changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_captured_not_derived() {
        let sale = Sale {
            id: "s1".to_string(),
            product_id: "d_pollo".to_string(),
            quantity: 2,
            total: Decimal::from(28000),
            created_at: Utc::now(),
        };
        // A later price change must not affect the stored total.
        assert_eq!(sale.total, Decimal::from(28000));
    }
}
