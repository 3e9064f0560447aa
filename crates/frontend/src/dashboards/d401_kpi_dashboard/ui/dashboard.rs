use crate::dashboards::d401_kpi_dashboard::api;
use crate::shared::components::charts::{BarChart, LineChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_kpi_dashboard::{KpiDashboardResponse, KpiMetric};
use leptos::prelude::*;
use leptos::task::spawn_local;

const CARDS_PER_ROW: usize = 3;

#[component]
pub fn KpiDashboard() -> impl IntoView {
    let data = RwSignal::new(None::<KpiDashboardResponse>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::get_kpi_summary().await {
            Ok(response) => data.set(Some(response)),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    let metric_rows = move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| {
                    d.metrics
                        .chunks(CARDS_PER_ROW)
                        .map(|row| row.to_vec())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    let revenue_trend = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.revenue_trend.clone()).unwrap_or_default())
    });
    let top_states = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.top_states.clone()).unwrap_or_default())
    });
    let top_products = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.top_products.clone()).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="d401_kpi_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">"KPI's Dashboard"</h2>
            </div>
            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="page__error">
                        <strong>"⚠ Error: "</strong>
                        {err}
                    </div>
                })}
                {move || loading.get().then(|| view! {
                    <div class="page__loading">"Loading data..."</div>
                })}

                <Show when=move || data.with(|d| d.is_some())>
                    {move || metric_rows().into_iter().map(|row| view! {
                        <div class="stat-cards">
                            {row.into_iter().map(metric_card).collect_view()}
                        </div>
                    }).collect_view()}

                    <LineChart
                        title="📈 Revenue Over Time"
                        x_label="Order Date"
                        y_label="Revenue"
                        data=revenue_trend
                    />
                    <div class="charts-row">
                        <BarChart
                            title="Top 10 States by Revenue"
                            x_label="State"
                            y_label="Revenue"
                            data=top_states
                        />
                        <BarChart
                            title="Top 10 Products by Revenue"
                            x_label="Product"
                            y_label="Revenue"
                            data=top_products
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

fn metric_card(metric: KpiMetric) -> impl IntoView {
    let value = metric.value;
    view! {
        <StatCard
            label=metric.label
            icon_name=metric.icon
            value=Signal::derive(move || value)
            format=metric.format
        />
    }
}
