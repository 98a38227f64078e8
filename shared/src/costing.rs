//! Weighted-average costing
//!
//! Inventory costing folds each stock addition into a running
//! quantity-weighted mean: the unit cost after an addition is
//! `(old_qty × old_cost + paid_total) / (old_qty + added_qty)`.

use rust_decimal::Decimal;

/// Fold one stock addition into the running weighted-average unit cost
///
/// `old_cost` is taken as the full value of the existing stock
/// (`old_quantity × old_cost`); at zero existing stock the result collapses
/// to `total_cost / quantity`. A zero resulting denominator falls back the
/// same way, so the function never divides by zero.
pub fn weighted_average_cost(
    old_quantity: Decimal,
    old_cost: Decimal,
    added_quantity: Decimal,
    added_total_cost: Decimal,
) -> Decimal {
    let new_total_quantity = old_quantity + added_quantity;
    if new_total_quantity > Decimal::ZERO {
        (old_quantity * old_cost + added_total_cost) / new_total_quantity
    } else if added_quantity > Decimal::ZERO {
        added_total_cost / added_quantity
    } else {
        Decimal::ZERO
    }
}
