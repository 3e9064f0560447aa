//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"d401_kpi_dashboard--dashboard"`) and a `data-page-category` with
//! one of the constants below.

/// Table with pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
