pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader: title, banner                |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext not found");

    view! {
        <div class="app-layout" class:app-layout--narrow=move || ctx.is_narrow()>
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <main data-zone="center" class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
