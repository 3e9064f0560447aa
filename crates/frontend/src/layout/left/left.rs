use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible sidebar column
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__header">"Navigation"</div>
            {children()}
        </aside>
    }
}
