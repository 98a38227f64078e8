//! Validation utilities for the Bakery Production Management Platform
//!
//! Includes the unit normalization applied to supplier-invoice line items.

use rust_decimal::Decimal;

// ============================================================================
// Quantity and Cost Validations
// ============================================================================

/// Validate that a stock quantity is strictly positive
pub fn validate_positive_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate that a monetary amount is not negative
pub fn validate_non_negative_cost(cost: Decimal) -> Result<(), &'static str> {
    if cost < Decimal::ZERO {
        return Err("Cost cannot be negative");
    }
    Ok(())
}

/// Validate a sale or manufacture count (whole units, at least one)
pub fn validate_unit_count(count: u32) -> Result<(), &'static str> {
    if count == 0 {
        return Err("Count must be at least 1");
    }
    Ok(())
}

/// Validate an ingredient reorder threshold
pub fn validate_min_threshold(threshold: Decimal) -> Result<(), &'static str> {
    if threshold < Decimal::ZERO {
        return Err("Reorder threshold cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Unit Handling
// ============================================================================

/// Stock units the engine tracks quantities in
pub const STOCK_UNITS: &[&str] = &["g", "ml", "units"];

/// Whether a unit string is one of the tracked stock units
pub fn is_stock_unit(unit: &str) -> bool {
    STOCK_UNITS.contains(&unit)
}

/// Normalize an invoice quantity to a tracked stock unit
///
/// Suppliers bill in kilograms and liters; stock is kept in grams and
/// milliliters. Unknown units pass through unchanged so a new ingredient can
/// still be created from them.
pub fn normalize_invoice_unit(unit: &str, quantity: Decimal) -> (String, Decimal) {
    match unit.trim().to_lowercase().as_str() {
        "kg" | "kilo" | "kilos" => ("g".to_string(), quantity * Decimal::from(1000)),
        "l" | "lt" | "litro" | "litros" => ("ml".to_string(), quantity * Decimal::from(1000)),
        "g" | "gr" | "gramos" => ("g".to_string(), quantity),
        "ml" => ("ml".to_string(), quantity),
        "unidad" | "unidades" | "und" | "units" => ("units".to_string(), quantity),
        other => (other.to_string(), quantity),
    }
}
