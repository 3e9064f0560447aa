use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d402_marketing_report::{MarketingReportRequest, MarketingReportResponse};

use super::loaded_dataset;
use crate::dashboards::d402_marketing_report::service;

/// GET /api/d402/marketing_report?start_date=2024-01-01&end_date=2024-03-31&region=Victoria&top_n=5
pub async fn get_marketing_report(
    Query(request): Query<MarketingReportRequest>,
) -> Result<Json<MarketingReportResponse>, StatusCode> {
    let dataset = loaded_dataset()?;

    tracing::info!(
        "D402 Report: {:?} .. {:?}, region {:?}, top {:?}",
        request.start_date,
        request.end_date,
        request.region,
        request.top_n
    );

    let response = service::get_marketing_report(dataset.records(), request);

    tracing::info!(
        "D402 Report: returning {} rows, {} products",
        response.rows.len(),
        response.top_products.len()
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::install_test_dataset;
    use axum::http::Uri;
    use chrono::NaiveDate;
    use contracts::dashboards::d402_marketing_report::ALL_REGIONS;

    fn decode(uri: &str) -> Option<MarketingReportRequest> {
        let uri: Uri = uri.parse().unwrap();
        Query::<MarketingReportRequest>::try_from_uri(&uri)
            .ok()
            .map(|Query(request)| request)
    }

    #[test]
    fn test_query_decoding() {
        let request = decode(
            "/api/d402/marketing_report?start_date=2024-01-02&top_n=7&region=New%20South%20Wales",
        )
        .unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(request.end_date, None);
        assert_eq!(request.region.as_deref(), Some("New South Wales"));
        assert_eq!(request.top_n, Some(7));

        let plus = decode("/api/d402/marketing_report?region=New+South+Wales").unwrap();
        assert_eq!(plus.region.as_deref(), Some("New South Wales"));

        assert_eq!(decode("/api/d402/marketing_report").unwrap(), MarketingReportRequest::default());
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        assert!(decode("/api/d402/marketing_report?start_date=01/02/2024").is_none());
        assert!(decode("/api/d402/marketing_report?end_date=2024-02-30").is_none());
    }

    #[tokio::test]
    async fn test_region_filter_through_handler() {
        install_test_dataset();
        let request = decode("/api/d402/marketing_report?region=New%20South%20Wales&top_n=7").unwrap();
        let Json(report) = get_marketing_report(Query(request)).await.unwrap();
        assert_eq!(report.region, "New South Wales");
        assert_eq!(report.top_n, 7);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.region_options[0], ALL_REGIONS);
    }
}
