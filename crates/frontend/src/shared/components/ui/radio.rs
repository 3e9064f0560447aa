use leptos::prelude::*;

/// Vertical group of radio buttons, one per `(value, label)` option
#[component]
pub fn RadioGroup(
    /// Caption above the options
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Value of the checked option
    #[prop(into)]
    value: Signal<String>,
    /// `name` attribute shared by the inputs
    #[prop(into)]
    name: String,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    let name = StoredValue::new(name);

    view! {
        <fieldset class="form__group form__radio-group">
            {move || label.get().map(|l| view! { <legend class="form__label">{l}</legend> })}
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, caption)| {
                    let id = format!("radio-{}-{}", name.get_value(), val);
                    let checked_val = val.clone();
                    let change_val = val.clone();
                    view! {
                        <div class="form__radio-wrapper">
                            <input
                                id=id.clone()
                                type="radio"
                                class="form__radio"
                                name=name.get_value()
                                value=val
                                prop:checked=move || value.get() == checked_val
                                on:change=move |_| on_change.run(change_val.clone())
                            />
                            <label class="form__radio-label" for=id>{caption}</label>
                        </div>
                    }
                }
            />
        </fieldset>
    }
}
