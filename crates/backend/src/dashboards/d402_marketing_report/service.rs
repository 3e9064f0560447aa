use chrono::NaiveDate;
use contracts::dashboards::d401_kpi_dashboard::CategoryValue;
use contracts::dashboards::d402_marketing_report::{
    MarketingReportRequest, MarketingReportResponse, ALL_REGIONS, DEFAULT_TOP_N, MAX_TOP_N,
    MIN_TOP_N,
};
use contracts::domain::order_record::OrderRecord;
use std::collections::HashSet;

use crate::shared::aggregation::{group_count, top_n};
use crate::shared::data::dataset::date_bounds;

/// Build the marketing report for the given filters
pub fn get_marketing_report(
    records: &[OrderRecord],
    request: MarketingReportRequest,
) -> MarketingReportResponse {
    let bounds = date_bounds(records);
    let top_n_value = request
        .top_n
        .unwrap_or(DEFAULT_TOP_N)
        .clamp(MIN_TOP_N, MAX_TOP_N);

    let Some((min_date, max_date)) = bounds else {
        return MarketingReportResponse {
            start_date: None,
            end_date: None,
            min_date: None,
            max_date: None,
            region: ALL_REGIONS.to_string(),
            region_options: vec![ALL_REGIONS.to_string()],
            top_n: top_n_value,
            rows: Vec::new(),
            top_products: Vec::new(),
        };
    };

    let start_date = request
        .start_date
        .unwrap_or(min_date)
        .clamp(min_date, max_date);
    let end_date = request
        .end_date
        .unwrap_or(max_date)
        .clamp(min_date, max_date);

    let in_range = filter_by_date_range(records, start_date, end_date);
    let region_options = region_options(&in_range);

    let region = match request.region {
        Some(region) if region_options.contains(&region) => region,
        Some(region) => {
            tracing::debug!(
                "D402 Report: region '{}' has no orders in {} .. {}, showing all regions",
                region,
                start_date,
                end_date
            );
            ALL_REGIONS.to_string()
        }
        None => ALL_REGIONS.to_string(),
    };

    let filtered = filter_by_region(in_range, &region);
    let top_products = top_products(&filtered, top_n_value);

    MarketingReportResponse {
        start_date: Some(start_date),
        end_date: Some(end_date),
        min_date: Some(min_date),
        max_date: Some(max_date),
        region,
        region_options,
        top_n: top_n_value,
        rows: filtered.into_iter().cloned().collect(),
        top_products,
    }
}

/// Rows with `start <= order_date <= end`. Empty when `start > end`.
pub fn filter_by_date_range(
    records: &[OrderRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&OrderRecord> {
    records
        .iter()
        .filter(|r| r.order_date >= start && r.order_date <= end)
        .collect()
}

/// [`ALL_REGIONS`] followed by distinct states in first-encounter order
pub fn region_options(rows: &[&OrderRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_REGIONS.to_string()];
    for row in rows {
        if seen.insert(row.state.as_str()) {
            options.push(row.state.clone());
        }
    }
    options
}

pub fn filter_by_region<'a>(rows: Vec<&'a OrderRecord>, region: &str) -> Vec<&'a OrderRecord> {
    if region == ALL_REGIONS {
        return rows;
    }
    rows.into_iter().filter(|r| r.state == region).collect()
}

/// Product names by row count, most frequent first
pub fn top_products(rows: &[&OrderRecord], limit: usize) -> Vec<CategoryValue> {
    top_n(
        group_count(rows.iter().copied(), |r| r.product_name.as_str()),
        limit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(order_id: i64, order_date: NaiveDate, state: &str, product: &str) -> OrderRecord {
        OrderRecord {
            order_id,
            order_date,
            delivery_date: order_date,
            customer_name: format!("Customer {}", order_id),
            gender: "Male".to_string(),
            age: 52,
            city: "City".to_string(),
            state: state.to_string(),
            product_id: 3,
            price_per_unit: 12.0,
            quantity: 1,
            total_price: 12.0,
            product_type: "Jacket".to_string(),
            product_name: product.to_string(),
            size: "XL".to_string(),
            colour: "navy".to_string(),
            stock: 3,
            delivery_duration: 0,
        }
    }

    fn sample() -> Vec<OrderRecord> {
        vec![
            record(1, date(2024, 1, 9), "Victoria", "Parka"),
            record(2, date(2024, 1, 10), "Queensland", "Bomber"),
            record(3, date(2024, 1, 10), "Victoria", "Bomber"),
            record(4, date(2024, 2, 1), "Tasmania", "Parka"),
            record(5, date(2024, 2, 1), "Victoria", "Chinos"),
        ]
    }

    fn request() -> MarketingReportRequest {
        MarketingReportRequest::default()
    }

    #[test]
    fn test_defaults_cover_whole_dataset() {
        let report = get_marketing_report(&sample(), request());
        assert_eq!(report.start_date, Some(date(2024, 1, 9)));
        assert_eq!(report.end_date, Some(date(2024, 2, 1)));
        assert_eq!(report.region, ALL_REGIONS);
        assert_eq!(report.top_n, DEFAULT_TOP_N);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(
            report.region_options,
            vec![ALL_REGIONS, "Victoria", "Queensland", "Tasmania"]
        );
    }

    #[test]
    fn test_single_day_range() {
        let records = sample();
        let day = date(2024, 1, 10);
        let report = get_marketing_report(
            &records,
            MarketingReportRequest {
                start_date: Some(day),
                end_date: Some(day),
                ..request()
            },
        );
        let expected: Vec<OrderRecord> = records
            .iter()
            .filter(|r| r.order_date == day)
            .cloned()
            .collect();
        assert_eq!(report.rows, expected);
        assert!(report.rows.iter().all(|r| r.order_date == day));
    }

    #[test]
    fn test_dates_compare_as_calendar_dates() {
        // 2024-01-09 < 2024-01-10 but "2024-1-9" > "2024-1-10" as strings
        let records = sample();
        let rows = filter_by_date_range(&records, date(2024, 1, 9), date(2024, 1, 10));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let report = get_marketing_report(
            &sample(),
            MarketingReportRequest {
                start_date: Some(date(2024, 2, 1)),
                end_date: Some(date(2024, 1, 9)),
                ..request()
            },
        );
        assert!(report.rows.is_empty());
        assert!(report.top_products.is_empty());
        assert_eq!(report.region_options, vec![ALL_REGIONS]);
    }

    #[test]
    fn test_dates_are_clamped_to_bounds() {
        let report = get_marketing_report(
            &sample(),
            MarketingReportRequest {
                start_date: Some(date(2023, 1, 1)),
                end_date: Some(date(2030, 1, 1)),
                ..request()
            },
        );
        assert_eq!(report.start_date, Some(date(2024, 1, 9)));
        assert_eq!(report.end_date, Some(date(2024, 2, 1)));
        assert_eq!(report.rows.len(), 5);
    }

    #[test]
    fn test_all_regions_is_date_filter_only() {
        let records = sample();
        let start = date(2024, 1, 10);
        let end = date(2024, 2, 1);
        let report = get_marketing_report(
            &records,
            MarketingReportRequest {
                start_date: Some(start),
                end_date: Some(end),
                region: Some(ALL_REGIONS.to_string()),
                top_n: None,
            },
        );
        let expected: Vec<OrderRecord> = filter_by_date_range(&records, start, end)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(report.rows, expected);
    }

    #[test]
    fn test_region_filter() {
        let report = get_marketing_report(
            &sample(),
            MarketingReportRequest {
                region: Some("Victoria".to_string()),
                ..request()
            },
        );
        assert_eq!(report.region, "Victoria");
        assert_eq!(report.rows.len(), 3);
        assert!(report.rows.iter().all(|r| r.state == "Victoria"));
    }

    #[test]
    fn test_region_outside_range_falls_back() {
        let report = get_marketing_report(
            &sample(),
            MarketingReportRequest {
                start_date: Some(date(2024, 2, 1)),
                region: Some("Queensland".to_string()),
                ..request()
            },
        );
        assert_eq!(report.region, ALL_REGIONS);
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn test_top_one_product_breaks_ties_by_encounter() {
        let report = get_marketing_report(
            &sample(),
            MarketingReportRequest {
                top_n: Some(1),
                ..request()
            },
        );
        // Parka and Bomber both appear twice, Parka is seen first
        assert_eq!(
            report.top_products,
            vec![CategoryValue {
                label: "Parka".to_string(),
                value: 2.0
            }]
        );
    }

    #[test]
    fn test_top_n_larger_than_products() {
        let report = get_marketing_report(
            &sample(),
            MarketingReportRequest {
                top_n: Some(30),
                ..request()
            },
        );
        assert_eq!(report.top_products.len(), 3);
        assert_eq!(report.top_products[2].label, "Chinos");
    }

    #[test]
    fn test_top_n_is_clamped() {
        let low = get_marketing_report(&sample(), MarketingReportRequest { top_n: Some(0), ..request() });
        assert_eq!(low.top_n, MIN_TOP_N);
        let high = get_marketing_report(&sample(), MarketingReportRequest { top_n: Some(99), ..request() });
        assert_eq!(high.top_n, MAX_TOP_N);
    }

    #[test]
    fn test_empty_dataset() {
        let report = get_marketing_report(&[], request());
        assert_eq!(report.start_date, None);
        assert_eq!(report.min_date, None);
        assert!(report.rows.is_empty());
        assert_eq!(report.region_options, vec![ALL_REGIONS]);
    }
}
