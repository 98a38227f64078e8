//! Dough production history models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One explicit dough-production batch, newest first in storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionLog {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Grams of dough produced in this batch
    pub amount_produced: Decimal,
    /// Raw-ingredient cost of the batch divided by its size
    pub cost_per_gram: Decimal,
}
