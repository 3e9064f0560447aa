use contracts::dashboards::d402_marketing_report::{MarketingReportRequest, MarketingReportResponse};

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/d402";

/// Get the marketing report; unset filters take the backend defaults
pub async fn get_marketing_report(
    request: &MarketingReportRequest,
) -> Result<MarketingReportResponse, String> {
    let query = serde_qs::to_string(request).map_err(|e| format!("Bad filter: {}", e))?;
    get_json(&format!("{}/marketing_report?{}", API_BASE, query)).await
}
