use crate::shared::icons::icon;
use contracts::shared::format::{format_value, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Metric value, None renders as N/A
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    let formatted = move || format_value(value.get(), &format);

    let value_class = move || {
        if value.get().is_some() {
            "stat-card__value"
        } else {
            "stat-card__value stat-card__value--na"
        }
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class=value_class>{formatted}</div>
            </div>
        </div>
    }
}
