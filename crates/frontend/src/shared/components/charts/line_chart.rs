use contracts::dashboards::d401_kpi_dashboard::TrendPoint;
use leptos::prelude::*;

use super::scale::{nice_max, short_number, tick_indices, ticks, Frame};

const Y_TICKS: usize = 5;
const X_TICKS: usize = 6;

/// Time series line chart, x positioned by calendar date
#[component]
pub fn LineChart(
    /// Heading above the chart
    #[prop(optional, into)]
    title: Option<String>,
    /// Date axis caption
    #[prop(into)]
    x_label: String,
    /// Value axis caption
    #[prop(into)]
    y_label: String,
    /// Points sorted ascending by date
    #[prop(into)]
    data: Signal<Vec<TrendPoint>>,
) -> impl IntoView {
    let frame = Frame {
        margin_bottom: 56.0,
        ..Frame::DEFAULT
    };

    let chart = move || {
        let points = data.get();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return view! { <div class="chart__empty">"No data"</div> }.into_any();
        };

        let max = nice_max(points.iter().map(|p| p.value).fold(0.0, f64::max));
        let span_days = (last.date - first.date).num_days() as f64;
        let x_of = |p: &TrendPoint| {
            if span_days <= 0.0 {
                frame.margin_left + frame.plot_width() / 2.0
            } else {
                let offset = (p.date - first.date).num_days() as f64;
                frame.margin_left + offset / span_days * frame.plot_width()
            }
        };

        let polyline = points
            .iter()
            .map(|p| format!("{:.1},{:.1}", x_of(p), frame.y(p.value, max)))
            .collect::<Vec<_>>()
            .join(" ");

        let grid = ticks(max, Y_TICKS)
            .into_iter()
            .map(|t| {
                let y = frame.y(t, max);
                view! {
                    <g class="chart__grid">
                        <line
                            x1=frame.margin_left.to_string()
                            x2=(frame.width - frame.margin_right).to_string()
                            y1=format!("{:.1}", y)
                            y2=format!("{:.1}", y)
                        />
                        <text
                            class="chart__tick"
                            x=(frame.margin_left - 8.0).to_string()
                            y=format!("{:.1}", y + 4.0)
                            text-anchor="end"
                        >
                            {short_number(t)}
                        </text>
                    </g>
                }
            })
            .collect_view();

        let x_ticks = tick_indices(points.len(), X_TICKS)
            .into_iter()
            .map(|i| {
                let p = &points[i];
                view! {
                    <text
                        class="chart__tick"
                        x=format!("{:.1}", x_of(p))
                        y=(frame.baseline() + 18.0).to_string()
                        text-anchor="middle"
                    >
                        {p.date.format("%Y-%m-%d").to_string()}
                    </text>
                }
            })
            .collect_view();

        let markers = points
            .iter()
            .map(|p| {
                view! {
                    <circle
                        class="chart__point"
                        cx=format!("{:.1}", x_of(p))
                        cy=format!("{:.1}", frame.y(p.value, max))
                        r="2.5"
                    />
                }
            })
            .collect_view();

        view! {
            <svg class="chart__svg" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                {grid}
                <line
                    class="chart__axis"
                    x1=frame.margin_left.to_string()
                    x2=(frame.width - frame.margin_right).to_string()
                    y1=frame.baseline().to_string()
                    y2=frame.baseline().to_string()
                />
                <polyline class="chart__line" points=polyline fill="none" />
                {markers}
                {x_ticks}
                <text
                    class="chart__axis-label"
                    x=(frame.margin_left + frame.plot_width() / 2.0).to_string()
                    y=(frame.height - 6.0).to_string()
                    text-anchor="middle"
                >
                    {x_label.clone()}
                </text>
                <text
                    class="chart__axis-label"
                    x="16"
                    y=(frame.margin_top + frame.plot_height() / 2.0).to_string()
                    text-anchor="middle"
                    transform=format!(
                        "rotate(-90 16 {:.1})",
                        frame.margin_top + frame.plot_height() / 2.0
                    )
                >
                    {y_label.clone()}
                </text>
            </svg>
        }
        .into_any()
    };

    view! {
        <div class="chart">
            {title.map(|t| view! { <div class="chart__title">{t}</div> })}
            {chart}
        </div>
    }
}
