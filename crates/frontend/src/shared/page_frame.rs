//! PageFrame: standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  is `"{entity}--{category}"`, e.g. `"d400_dataset_overview--list"`
//!   - `data-page-category`  is one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// - `list`      → `page`
/// - `dashboard` → `page page--dashboard`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_LIST => "page",
        _ => "page",
    };

    view! {
        <div id=page_id data-page-category=category class=class>
            {children()}
        </div>
    }
}
