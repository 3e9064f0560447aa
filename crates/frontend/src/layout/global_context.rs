use contracts::shared::page::Page;
use contracts::shared::ui_config::{PageLayout, UiConfig};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_PARAM: &str = "page";

/// Per-browser-session UI state
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    pub ui_config: RwSignal<UiConfig>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
            ui_config: RwSignal::new(UiConfig::default()),
        }
    }

    /// Restore the page from `?page=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get(PAGE_PARAM).and_then(|key| Page::from_key(key)) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                PAGE_PARAM.to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn select_page(&self, page: Page) {
        log::debug!("Switching to page '{}'", page.key());
        self.active_page.set(page);
    }

    pub fn is_narrow(&self) -> bool {
        self.ui_config.with(|c| c.layout == PageLayout::Narrow)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
