use chrono::NaiveDate;
use contracts::dashboards::d401_kpi_dashboard::{
    CategoryValue, KpiDashboardResponse, KpiMetric, KpiSummary, TrendPoint, TOP_RANKING_SIZE,
};
use contracts::domain::order_record::OrderRecord;
use contracts::shared::format::ValueFormat;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::shared::aggregation::{group_sum, top_n};

/// Build the full KPI dashboard from the order table
pub fn get_kpi_dashboard(records: &[OrderRecord]) -> KpiDashboardResponse {
    let summary = compute_summary(records);

    KpiDashboardResponse {
        metrics: build_metrics(&summary),
        summary,
        revenue_trend: revenue_trend(records),
        top_states: top_states_by_revenue(records),
        top_products: top_products_by_revenue(records),
    }
}

pub fn compute_summary(records: &[OrderRecord]) -> KpiSummary {
    let total_revenue: f64 = records.iter().map(|r| r.total_price).sum();

    // Line items per order
    let mut items_per_order: HashMap<i64, usize> = HashMap::new();
    for record in records {
        *items_per_order.entry(record.order_id).or_insert(0) += 1;
    }
    let total_orders = items_per_order.len();

    let total_customers = records
        .iter()
        .map(|r| r.customer_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let total_items: usize = items_per_order.values().sum();

    KpiSummary {
        total_orders,
        total_revenue,
        total_customers,
        avg_order_value: safe_div(total_revenue, total_orders),
        avg_customer_spend: safe_div(total_revenue, total_customers),
        avg_items_per_order: safe_div(total_items as f64, total_orders),
    }
}

/// `None` instead of dividing by zero
fn safe_div(numerator: f64, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator / denominator as f64)
    }
}

/// Revenue per order date, ascending by date
pub fn revenue_trend(records: &[OrderRecord]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.order_date).or_insert(0.0) += record.total_price;
    }

    by_date
        .into_iter()
        .map(|(date, value)| TrendPoint { date, value })
        .collect()
}

pub fn top_states_by_revenue(records: &[OrderRecord]) -> Vec<CategoryValue> {
    top_n(
        group_sum(records, |r| r.state.as_str(), |r| r.total_price),
        TOP_RANKING_SIZE,
    )
}

pub fn top_products_by_revenue(records: &[OrderRecord]) -> Vec<CategoryValue> {
    top_n(
        group_sum(records, |r| r.product_name.as_str(), |r| r.total_price),
        TOP_RANKING_SIZE,
    )
}

/// Metric cards in display order: counts first, then averages
pub fn build_metrics(summary: &KpiSummary) -> Vec<KpiMetric> {
    let money = || ValueFormat::Money {
        symbol: "$".to_string(),
    };

    vec![
        metric(
            "total_orders",
            "Total Orders",
            "orders",
            Some(summary.total_orders as f64),
            ValueFormat::Integer,
        ),
        metric(
            "total_revenue",
            "Total Revenue",
            "revenue",
            Some(summary.total_revenue),
            money(),
        ),
        metric(
            "total_customers",
            "Total Customers",
            "customers",
            Some(summary.total_customers as f64),
            ValueFormat::Integer,
        ),
        metric(
            "avg_items_per_order",
            "Avg Items per Order",
            "products",
            summary.avg_items_per_order,
            ValueFormat::Number { decimals: 2 },
        ),
        metric(
            "avg_order_value",
            "Avg Order Value",
            "invoices",
            summary.avg_order_value,
            money(),
        ),
        metric(
            "avg_customer_spend",
            "Avg Customer Spend",
            "payments",
            summary.avg_customer_spend,
            money(),
        ),
    ]
}

fn metric(id: &str, label: &str, icon: &str, value: Option<f64>, format: ValueFormat) -> KpiMetric {
    KpiMetric {
        id: id.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        value,
        format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(order_id: i64, order_date: NaiveDate, customer: &str, state: &str, product: &str, total_price: f64) -> OrderRecord {
        OrderRecord {
            order_id,
            order_date,
            delivery_date: order_date,
            customer_name: customer.to_string(),
            gender: "Female".to_string(),
            age: 30,
            city: "City".to_string(),
            state: state.to_string(),
            product_id: 1,
            price_per_unit: total_price,
            quantity: 1,
            total_price,
            product_type: "Shirt".to_string(),
            product_name: product.to_string(),
            size: "M".to_string(),
            colour: "red".to_string(),
            stock: 10,
            delivery_duration: 0,
        }
    }

    fn sample() -> Vec<OrderRecord> {
        vec![
            record(1, date(2024, 1, 1), "Ann", "Victoria", "Oxford", 10.0),
            record(2, date(2024, 1, 2), "Bob", "Tasmania", "Bomber", 20.0),
            record(2, date(2024, 1, 2), "Bob", "Tasmania", "Chinos", 5.0),
        ]
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_revenue_trend_example() {
        let trend = revenue_trend(&sample());
        assert_eq!(
            trend,
            vec![
                TrendPoint { date: date(2024, 1, 1), value: 10.0 },
                TrendPoint { date: date(2024, 1, 2), value: 25.0 },
            ]
        );
    }

    #[test]
    fn test_summary() {
        let summary = compute_summary(&sample());
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_customers, 2);
        assert!(approx(summary.total_revenue, 35.0));
        assert!(approx(summary.avg_order_value.unwrap(), 17.5));
        assert!(approx(summary.avg_customer_spend.unwrap(), 17.5));
        assert!(approx(summary.avg_items_per_order.unwrap(), 1.5));
    }

    #[test]
    fn test_empty_table_has_no_averages() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.avg_order_value, None);
        assert_eq!(summary.avg_customer_spend, None);
        assert_eq!(summary.avg_items_per_order, None);

        let response = get_kpi_dashboard(&[]);
        assert!(response.revenue_trend.is_empty());
        assert!(response.top_states.is_empty());
        assert!(response.top_products.is_empty());
    }

    #[test]
    fn test_total_revenue_matches_per_order_and_trend_sums() {
        let records = sample();
        let summary = compute_summary(&records);

        let mut per_order: HashMap<i64, f64> = HashMap::new();
        for r in &records {
            *per_order.entry(r.order_id).or_insert(0.0) += r.total_price;
        }
        assert!(approx(per_order.values().sum::<f64>(), summary.total_revenue));

        let trend = revenue_trend(&records);
        assert!(trend.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(approx(trend.iter().map(|p| p.value).sum::<f64>(), summary.total_revenue));
    }

    #[test]
    fn test_top_states_limited_and_sorted() {
        let mut records = Vec::new();
        for i in 0..15 {
            let state = format!("State {}", i);
            records.push(record(i, date(2024, 2, 1), "Ann", &state, "Oxford", (i % 4) as f64 * 10.0));
        }

        let top = top_states_by_revenue(&records);
        assert_eq!(top.len(), TOP_RANKING_SIZE);
        assert!(top.windows(2).all(|w| w[0].value >= w[1].value));
        assert!(top
            .iter()
            .all(|t| records.iter().any(|r| r.state == t.label)));
        // ties keep first-encounter order
        assert_eq!(top[0].label, "State 3");
        assert_eq!(top[1].label, "State 7");
    }

    #[test]
    fn test_top_products_by_revenue() {
        let top = top_products_by_revenue(&sample());
        assert_eq!(top[0], CategoryValue { label: "Bomber".to_string(), value: 20.0 });
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn test_metric_cards() {
        let metrics = build_metrics(&compute_summary(&[]));
        let ids: Vec<&str> = metrics.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "total_orders",
                "total_revenue",
                "total_customers",
                "avg_items_per_order",
                "avg_order_value",
                "avg_customer_spend"
            ]
        );
        assert_eq!(metrics[4].value, None);
        assert_eq!(metrics[0].value, Some(0.0));
    }
}
