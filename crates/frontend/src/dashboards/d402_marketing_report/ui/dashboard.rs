use crate::dashboards::d402_marketing_report::api;
use crate::shared::components::charts::BarChart;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::order_table::OrderTable;
use crate::shared::components::ui::select::Select;
use crate::shared::components::ui::slider::Slider;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d402_marketing_report::{
    MarketingReportRequest, MarketingReportResponse, ALL_REGIONS, DEFAULT_TOP_N, MAX_TOP_N,
    MIN_TOP_N,
};
use contracts::shared::format::format_thousands;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Orders filtered by date range and state, with the most ordered products
#[component]
pub fn MarketingReport() -> impl IntoView {
    // Only what the user picked; everything else comes back resolved from the server
    let filters = RwSignal::new(MarketingReportRequest::default());

    let report = RwSignal::new(None::<MarketingReportResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let request = filters.get();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let result = api::get_marketing_report(&request).await;

            // Filters changed while this request was in flight; the newer one wins
            if filters.with_untracked(|current| current != &request) {
                return;
            }

            match result {
                Ok(response) => {
                    filters.update_untracked(|f| adopt_resolved_region(f, &response));
                    report.set(Some(response));
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let start_date = Signal::derive(move || report.with(|r| r.as_ref().and_then(|r| r.start_date)));
    let end_date = Signal::derive(move || report.with(|r| r.as_ref().and_then(|r| r.end_date)));
    let min_date = Signal::derive(move || report.with(|r| r.as_ref().and_then(|r| r.min_date)));
    let max_date = Signal::derive(move || report.with(|r| r.as_ref().and_then(|r| r.max_date)));

    let region = Signal::derive(move || {
        report.with(|r| {
            r.as_ref()
                .map(|r| r.region.clone())
                .unwrap_or_else(|| ALL_REGIONS.to_string())
        })
    });
    let region_options = Signal::derive(move || {
        report.with(|r| {
            r.as_ref()
                .map(|r| r.region_options.clone())
                .unwrap_or_else(|| vec![ALL_REGIONS.to_string()])
        })
    });
    let top_n = Signal::derive(move || {
        report.with(|r| r.as_ref().map(|r| r.top_n).unwrap_or(DEFAULT_TOP_N))
    });

    let rows = Signal::derive(move || report.with(|r| r.as_ref().map(|r| r.rows.clone()).unwrap_or_default()));
    let top_products = Signal::derive(move || {
        report.with(|r| r.as_ref().map(|r| r.top_products.clone()).unwrap_or_default())
    });
    let row_count = move || format_thousands(rows.with(|r| r.len()) as i64);

    view! {
        <PageFrame page_id="d402_marketing_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">"Marketing Report"</h2>
            </div>
            <div class="page__content">
                <div class="filter-panel">
                    <DateInput
                        label="Start date"
                        value=start_date
                        min=min_date
                        max=max_date
                        on_change=move |d| filters.update(|f| f.start_date = Some(d))
                    />
                    <DateInput
                        label="End date"
                        value=end_date
                        min=min_date
                        max=max_date
                        on_change=move |d| filters.update(|f| f.end_date = Some(d))
                    />
                    <Select
                        label="Select a state"
                        value=region
                        options=region_options
                        on_change=Callback::new(move |v: String| filters.update(|f| f.region = Some(v)))
                    />
                    <Slider
                        label="Top N products"
                        value=top_n
                        min=MIN_TOP_N
                        max=MAX_TOP_N
                        on_change=Callback::new(move |n| filters.update(|f| f.top_n = Some(n)))
                    />
                </div>

                {move || error.get().map(|err| view! {
                    <div class="page__error">
                        <strong>"⚠ Error: "</strong>
                        {err}
                    </div>
                })}
                {move || loading.get().then(|| view! {
                    <div class="page__loading">"Loading data..."</div>
                })}

                <div class="page__summary">
                    "Orders: " <strong>{row_count}</strong>
                </div>
                <OrderTable rows=rows />

                <BarChart
                    title="🔥 Top Products by State"
                    x_label="Product"
                    y_label="Count"
                    data=top_products
                />
            </div>
        </PageFrame>
    }
}

/// Keep the picked region in step with the one the server applied, so a
/// region that fell back to [`ALL_REGIONS`] is not sent again later.
fn adopt_resolved_region(filters: &mut MarketingReportRequest, response: &MarketingReportResponse) {
    if filters.region.as_deref().is_some_and(|r| r != response.region) {
        filters.region = Some(response.region.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn response(region: &str) -> MarketingReportResponse {
        let day = NaiveDate::from_ymd_opt(2024, 2, 1);
        MarketingReportResponse {
            start_date: day,
            end_date: day,
            min_date: day,
            max_date: day,
            region: region.to_string(),
            region_options: vec![ALL_REGIONS.to_string()],
            top_n: DEFAULT_TOP_N,
            rows: Vec::new(),
            top_products: Vec::new(),
        }
    }

    #[test]
    fn test_fallen_back_region_is_not_resent() {
        let mut filters = MarketingReportRequest {
            region: Some("Queensland".to_string()),
            ..Default::default()
        };
        adopt_resolved_region(&mut filters, &response(ALL_REGIONS));
        assert_eq!(filters.region.as_deref(), Some(ALL_REGIONS));

        // widening the dates again keeps All Regions
        filters.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(filters.region.as_deref(), Some(ALL_REGIONS));
    }

    #[test]
    fn test_applied_region_is_kept() {
        let mut filters = MarketingReportRequest {
            region: Some("Victoria".to_string()),
            ..Default::default()
        };
        adopt_resolved_region(&mut filters, &response("Victoria"));
        assert_eq!(filters.region.as_deref(), Some("Victoria"));

        let mut untouched = MarketingReportRequest::default();
        adopt_resolved_region(&mut untouched, &response(ALL_REGIONS));
        assert_eq!(untouched.region, None);
    }
}
