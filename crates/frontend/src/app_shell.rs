//! Main layout: sidebar page selector plus the selected page in the center

use crate::dashboards::{DatasetOverview, KpiDashboard, MarketingReport};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use contracts::shared::page::Page;
use leptos::prelude::*;

/// Syncs the selected page with `?page=...` once on creation.
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active_page.get() {
                        Page::Home => view! { <DatasetOverview /> }.into_any(),
                        Page::KpiDashboard => view! { <KpiDashboard /> }.into_any(),
                        Page::MarketingReport => view! { <MarketingReport /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}
