use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bounded to `[min, max]`
#[component]
pub fn DateInput(
    /// Label shown above the picker
    #[prop(into)]
    label: String,
    /// Selected date
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Earliest selectable date
    #[prop(into)]
    min: Signal<Option<NaiveDate>>,
    /// Latest selectable date
    #[prop(into)]
    max: Signal<Option<NaiveDate>>,
    /// Called with the picked date; cleared or invalid input is ignored
    on_change: impl Fn(NaiveDate) + 'static,
) -> impl IntoView {
    let iso = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="date"
                class="form__input"
                prop:value=move || iso(value.get())
                min=move || iso(min.get())
                max=move || iso(max.get())
                on:change=move |ev| {
                    if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                        on_change(date);
                    }
                }
            />
        </div>
    }
}
