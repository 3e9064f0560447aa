use leptos::prelude::*;

/// Drop-down where each option's value is also its caption
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    /// Selected option
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let current = option.clone();
                        let option_value = option.clone();
                        view! {
                            <option value=option_value selected=move || value.get() == current>
                                {option}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
