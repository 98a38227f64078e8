//! Inventory movement audit log models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An append-only audit record of a stock change
///
/// Movements are write-only within the engine: they are never read back to
/// reconstruct state. `subject_id` names the stock item the entry concerns:
/// an ingredient id, or a product id for composite manufacture entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryMovement {
    pub id: String,
    pub date: DateTime<Utc>,
    pub kind: MovementKind,
    pub subject_id: String,
    pub quantity: Decimal,
    pub description: String,
}

/// Direction/nature of a stock change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Stock added (purchase, invoice merge)
    In,
    /// Stock consumed (manufacture, sale)
    Out,
    /// Stock converted by dough production
    Production,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::In => "in",
            MovementKind::Out => "out",
            MovementKind::Production => "production",
        }
    }
}
