//! Reporting service for the business dashboard
//! Provides dough on hand, revenue, inventory valuation and low-stock counts

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::store::Store;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: Store,
}

/// Dashboard metrics
#[derive(Debug, Serialize)]
pub struct DashboardMetrics {
    /// Grams of intermediate dough on hand
    pub dough_available_g: Decimal,
    /// Revenue from sales recorded today
    pub today_revenue: Decimal,
    /// Stock valued at weighted-average costs, dough at its derived cost
    pub inventory_value: Decimal,
    /// Ingredients at or below their reorder threshold
    pub low_stock_count: i64,
    /// Daily revenue for the trailing week, oldest first
    pub sales_trend: Vec<DailyRevenue>,
}

/// Revenue total for one calendar day
#[derive(Debug, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub total: Decimal,
}

impl ReportingService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Compute the dashboard metrics from current state
    ///
    /// Pure read: the intermediate's derived cost is evaluated locally
    /// rather than through the cached field.
    pub async fn dashboard_metrics(&self) -> DashboardMetrics {
        self.store
            .read(|state| {
                let today = Utc::now().date_naive();

                let dough_cost = state
                    .dough_recipe
                    .cost_per_gram(|id| state.ingredient(id).map(|i| i.cost));

                let dough_available_g = state
                    .intermediate()
                    .map(|i| i.quantity)
                    .unwrap_or(Decimal::ZERO);

                let inventory_value: Decimal = state
                    .ingredients
                    .iter()
                    .map(|ing| {
                        if ing.is_intermediate() {
                            ing.quantity * dough_cost
                        } else {
                            ing.stock_value()
                        }
                    })
                    .sum();

                let low_stock_count = state
                    .ingredients
                    .iter()
                    .filter(|i| i.below_threshold())
                    .count() as i64;

                let today_revenue: Decimal = state
                    .sales
                    .iter()
                    .filter(|s| s.created_at.date_naive() == today)
                    .map(|s| s.total)
                    .sum();

                let sales_trend = (0..7)
                    .rev()
                    .map(|offset| {
                        let date = today - Duration::days(offset);
                        let total = state
                            .sales
                            .iter()
                            .filter(|s| s.created_at.date_naive() == date)
                            .map(|s| s.total)
                            .sum();
                        DailyRevenue { date, total }
                    })
                    .collect();

                DashboardMetrics {
                    dough_available_g,
                    today_revenue,
                    inventory_value,
                    low_stock_count,
                    sales_trend,
                }
            })
            .await
    }
}
