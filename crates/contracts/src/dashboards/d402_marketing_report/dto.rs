use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboards::d401_kpi_dashboard::CategoryValue;
use crate::domain::order_record::OrderRecord;

/// Region selector value that disables the region filter
pub const ALL_REGIONS: &str = "All Regions";

pub const DEFAULT_TOP_N: usize = 5;
pub const MIN_TOP_N: usize = 1;
pub const MAX_TOP_N: usize = 30;

/// Filter parameters of the marketing report.
///
/// Absent dates default to the dataset bounds, an absent region means
/// [`ALL_REGIONS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketingReportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingReportResponse {
    /// Effective start date after defaulting and clamping
    pub start_date: Option<NaiveDate>,
    /// Effective end date after defaulting and clamping
    pub end_date: Option<NaiveDate>,
    /// Earliest order date in the dataset
    pub min_date: Option<NaiveDate>,
    /// Latest order date in the dataset
    pub max_date: Option<NaiveDate>,
    pub region: String,
    /// [`ALL_REGIONS`] followed by the states seen in the date range
    pub region_options: Vec<String>,
    pub top_n: usize,
    pub rows: Vec<OrderRecord>,
    /// Product name with its row count, most frequent first
    pub top_products: Vec<CategoryValue>,
}
