use leptos::prelude::*;

/// Integer range slider with its current value shown next to the label.
///
/// Reports the value once the thumb is released.
#[component]
pub fn Slider(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<usize>,
    min: usize,
    max: usize,
    /// Change event handler
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label} ": " <strong>{move || value.get()}</strong>
            </label>
            <input
                type="range"
                class="form__slider"
                min=min.to_string()
                max=max.to_string()
                step="1"
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<usize>() {
                        on_change.run(v.clamp(min, max));
                    }
                }
            />
            <div class="form__slider-bounds">
                <span>{min}</span>
                <span>{max}</span>
            </div>
        </div>
    }
}
