//! Stock alert service
//!
//! Thin wrapper over the pure alert projection in the shared crate; the
//! service only supplies current state and the clock.

use chrono::Utc;

use shared::models::{project_alerts, StockAlert};

use crate::store::Store;

/// Alert service for low-stock classification and runway forecasting
#[derive(Clone)]
pub struct AlertService {
    store: Store,
}

impl AlertService {
    /// Create a new AlertService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Project alerts for every ingredient from current state
    ///
    /// Pure read: safe to call at any frequency.
    pub async fn list_alerts(&self) -> Vec<StockAlert> {
        self.store
            .read(|state| {
                project_alerts(&state.ingredients, &state.products, &state.sales, Utc::now())
            })
            .await
    }
}
