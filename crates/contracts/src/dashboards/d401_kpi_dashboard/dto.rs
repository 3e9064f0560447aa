use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::format::ValueFormat;

/// Number of rows kept in the state and product rankings
pub const TOP_RANKING_SIZE: usize = 10;

/// Aggregate scalars over the full table.
///
/// Averages are `None` when their denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub total_customers: usize,
    pub avg_order_value: Option<f64>,
    pub avg_customer_spend: Option<f64>,
    /// Mean line-item count per order
    pub avg_items_per_order: Option<f64>,
}

/// One metric card on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMetric {
    pub id: String,
    pub label: String,
    /// Icon name understood by the frontend icon() helper
    pub icon: String,
    pub value: Option<f64>,
    pub format: ValueFormat,
}

/// Revenue summed for a single order date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Aggregate value for a category label (state, product name, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiDashboardResponse {
    /// Cards in display order
    pub metrics: Vec<KpiMetric>,
    pub summary: KpiSummary,
    pub revenue_trend: Vec<TrendPoint>,
    pub top_states: Vec<CategoryValue>,
    pub top_products: Vec<CategoryValue>,
}
