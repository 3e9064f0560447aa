use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::get_json;
use contracts::shared::ui_config::UiConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Title and banner come from the server config; defaults stay on failure
    spawn_local(async move {
        match get_json::<UiConfig>("/api/config/ui").await {
            Ok(config) => {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&config.page_title);
                }
                ctx.ui_config.set(config);
            }
            Err(e) => log::warn!("Failed to load UI config: {}", e),
        }
    });

    view! {
        <MainLayout />
    }
}
