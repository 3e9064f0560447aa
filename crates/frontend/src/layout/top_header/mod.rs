//! Top bar: sidebar toggle, page title and the banner image.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let title = move || ctx.ui_config.with(|c| c.title.clone());
    let banner = move || ctx.ui_config.with(|c| c.banner_image.clone());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("chevrons-left")
                    } else {
                        icon("chevrons-right")
                    }}
                </button>
                <h1 class="top-header__title">{title}</h1>
            </div>
        </div>
        {move || banner().map(|src| view! {
            <img class="top-header__banner" src=src alt="" />
        })}
    }
}
