use contracts::dashboards::d401_kpi_dashboard::CategoryValue;
use leptos::prelude::*;

use super::scale::{nice_max, short_number, ticks, truncate_label, Frame};

const Y_TICKS: usize = 5;
const LABEL_CHARS: usize = 18;

/// Vertical bar chart, one bar per category in the given order
#[component]
pub fn BarChart(
    /// Heading above the chart
    #[prop(optional, into)]
    title: Option<String>,
    /// Category axis caption
    #[prop(into)]
    x_label: String,
    /// Value axis caption
    #[prop(into)]
    y_label: String,
    #[prop(into)]
    data: Signal<Vec<CategoryValue>>,
) -> impl IntoView {
    let frame = Frame::DEFAULT;

    let chart = move || {
        let items = data.get();
        if items.is_empty() {
            return view! { <div class="chart__empty">"No data for the selected filters"</div> }
                .into_any();
        }

        let max = nice_max(items.iter().map(|c| c.value).fold(0.0, f64::max));
        let band = frame.plot_width() / items.len() as f64;
        let bar_width = band * 0.7;

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

        let bars = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let center = frame.margin_left + band * (i as f64 + 0.5);
                let top = frame.y(item.value, max);
                let label_y = frame.baseline() + 14.0;
                view! {
                    <g class="chart__bar">
                        <rect
                            x=format!("{:.1}", center - bar_width / 2.0)
                            y=format!("{:.1}", top)
                            width=format!("{:.1}", bar_width)
                            height=format!("{:.1}", frame.baseline() - top)
                        />
                        <text
                            class="chart__value"
                            x=format!("{:.1}", center)
                            y=format!("{:.1}", top - 4.0)
                            text-anchor="middle"
                        >
                            {short_number(item.value)}
                        </text>
                        <text
                            class="chart__tick"
                            x=format!("{:.1}", center)
                            y=format!("{:.1}", label_y)
                            text-anchor="end"
                            transform=format!("rotate(-35 {:.1} {:.1})", center, label_y)
                        >
                            {truncate_label(&item.label, LABEL_CHARS)}
                        </text>
                    </g>
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
                {bars}
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
