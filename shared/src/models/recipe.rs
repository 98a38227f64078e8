//! Dough recipe model and the derived-cost / explosion logic

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The master dough formula, expressed for a reference batch size
///
/// Mutable singleton, edited live. Every read of the intermediate
/// ingredient's cost depends on the recipe's current value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoughRecipe {
    /// Reference batch size the item quantities describe (e.g. 1000 g)
    pub base_amount: Decimal,
    pub items: Vec<DoughRecipeItem>,
}

/// One raw-ingredient requirement of the reference batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoughRecipeItem {
    pub ingredient_id: String,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl DoughRecipe {
    /// Scale factor for producing `amount` grams; 0 when the reference batch
    /// size is 0 (never NaN or infinity)
    pub fn batch_ratio(&self, amount: Decimal) -> Decimal {
        if self.base_amount.is_zero() {
            Decimal::ZERO
        } else {
            amount / self.base_amount
        }
    }

    /// Derived cost of one gram of dough from current raw-ingredient costs
    ///
    /// `cost_of` resolves an ingredient id to its current unit cost; unknown
    /// ids contribute nothing. This is the authoritative cost of the
    /// intermediate good, a pure function of (recipe, raw costs) rather than
    /// a weighted average of production history.
    pub fn cost_per_gram<F>(&self, cost_of: F) -> Decimal
    where
        F: Fn(&str) -> Option<Decimal>,
    {
        if self.base_amount.is_zero() {
            return Decimal::ZERO;
        }
        let batch_cost: Decimal = self
            .items
            .iter()
            .map(|item| cost_of(&item.ingredient_id).unwrap_or(Decimal::ZERO) * item.quantity)
            .sum();
        batch_cost / self.base_amount
    }

    /// Explode the recipe for `amount` grams into absolute requirements
    pub fn requirements_for(&self, amount: Decimal) -> Vec<(String, Decimal)> {
        let ratio = self.batch_ratio(amount);
        self.items
            .iter()
            .map(|item| (item.ingredient_id.clone(), item.quantity * ratio))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> DoughRecipe {
        DoughRecipe {
            base_amount: Decimal::from(1000),
            items: vec![
                DoughRecipeItem {
                    ingredient_id: "harina".to_string(),
                    quantity: Decimal::from(600),
                    unit: None,
                },
                DoughRecipeItem {
                    ingredient_id: "agua".to_string(),
                    quantity: Decimal::from(300),
                    unit: None,
                },
            ],
        }
    }

    #[test]
    fn test_batch_ratio() {
        assert_eq!(recipe().batch_ratio(Decimal::from(3000)), Decimal::from(3));
        assert_eq!(
            recipe().batch_ratio(Decimal::from(500)),
            Decimal::new(5, 1)
        );
    }

    #[test]
    fn test_batch_ratio_zero_base_amount_guard() {
        let degenerate = DoughRecipe {
            base_amount: Decimal::ZERO,
            items: vec![],
        };
        assert_eq!(degenerate.batch_ratio(Decimal::from(1000)), Decimal::ZERO);
    }

    #[test]
    fn test_cost_per_gram_from_raw_costs() {
        // 600 g flour at 3.8 + 300 ml water at 0.1 = 2310 per 1000 g batch
        let cost = recipe().cost_per_gram(|id| match id {
            "harina" => Some(Decimal::new(38, 1)),
            "agua" => Some(Decimal::new(1, 1)),
            _ => None,
        });
        assert_eq!(cost, Decimal::new(231, 2));
    }

    #[test]
    fn test_cost_per_gram_unknown_ingredient_contributes_nothing() {
        let cost = recipe().cost_per_gram(|id| match id {
            "harina" => Some(Decimal::from(1)),
            _ => None,
        });
        assert_eq!(cost, Decimal::new(6, 1));
    }

    #[test]
    fn test_cost_per_gram_zero_base_amount_guard() {
        let degenerate = DoughRecipe {
            base_amount: Decimal::ZERO,
            items: recipe().items,
        };
        assert_eq!(degenerate.cost_per_gram(|_| Some(Decimal::ONE)), Decimal::ZERO);
    }

    #[test]
    fn test_requirements_for_scales_items() {
        let reqs = recipe().requirements_for(Decimal::from(500));
        assert_eq!(
            reqs,
            vec![
                ("harina".to_string(), Decimal::from(300)),
                ("agua".to_string(), Decimal::from(150)),
            ]
        );
    }
}
