//! Page selector in the left sidebar

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::RadioGroup;
use crate::shared::icons::icon;
use contracts::shared::page::Page;
use leptos::prelude::*;

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Home => "home",
        Page::KpiDashboard => "dashboard",
        Page::MarketingReport => "report",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let options: Vec<(String, String)> = Page::ALL
        .iter()
        .map(|p| (p.key().to_string(), p.label().to_string()))
        .collect();
    let selected = Signal::derive(move || ctx.active_page.get().key().to_string());

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__item-content">
                {move || icon(page_icon(ctx.active_page.get()))}
                <span>{move || ctx.active_page.get().label()}</span>
            </div>
            <RadioGroup
                label="Pages"
                name="pages"
                value=selected
                options=options
                on_change=Callback::new(move |key: String| {
                    if let Some(page) = Page::from_key(&key) {
                        ctx.select_page(page);
                    }
                })
            />
        </div>
    }
}
