use axum::{http::StatusCode, Json};
use contracts::dashboards::d401_kpi_dashboard::KpiDashboardResponse;

use super::loaded_dataset;
use crate::dashboards::d401_kpi_dashboard::service;

/// GET /api/d401/kpi_summary
pub async fn get_kpi_summary() -> Result<Json<KpiDashboardResponse>, StatusCode> {
    let dataset = loaded_dataset()?;
    let response = service::get_kpi_dashboard(dataset.records());

    tracing::info!(
        "D401 KPI: {} orders, {} customers, {} trend points",
        response.summary.total_orders,
        response.summary.total_customers,
        response.revenue_trend.len()
    );

    Ok(Json(response))
}
