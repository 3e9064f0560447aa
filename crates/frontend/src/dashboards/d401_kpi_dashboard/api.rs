use contracts::dashboards::d401_kpi_dashboard::KpiDashboardResponse;

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/d401";

pub async fn get_kpi_summary() -> Result<KpiDashboardResponse, String> {
    get_json(&format!("{}/kpi_summary", API_BASE)).await
}
