use crate::shared::icons::icon;
use contracts::dashboards::d400_dataset_overview::DEFAULT_PAGE_SIZE;
use contracts::shared::format::format_thousands;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [50, 100, 200, 500];

/// 1-based first and last row shown on `page`; `(0, 0)` when nothing is shown
pub fn row_range(page: usize, page_size: usize, total_count: usize) -> (usize, usize) {
    let first = page * page_size;
    if first >= total_count {
        return (0, 0);
    }
    (first + 1, (first + page_size).min(total_count))
}

/// Pagination controls for server-paged tables
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Rows across all pages
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    let info = move || {
        let count = total_count.get();
        let (first, last) = row_range(current_page.get(), page_size.get(), count);
        format!(
            "Rows {}-{} of {} (page {} / {})",
            format_thousands(first as i64),
            format_thousands(last as i64),
            format_thousands(count as i64),
            current_page.get() + 1,
            total_pages.get().max(1)
        )
    };

    view! {
        <div class="pagination-controls">
            {nav_button("chevrons-left", "First page", at_start, move || on_page_change.run(0))}
            {nav_button("chevron-left", "Previous page", at_start, move || {
                on_page_change.run(current_page.get().saturating_sub(1))
            })}
            <span class="pagination-info">{info}</span>
            {nav_button("chevron-right", "Next page", at_end, move || {
                on_page_change.run((current_page.get() + 1).min(total_pages.get().saturating_sub(1)))
            })}
            {nav_button("chevrons-right", "Last page", at_end, move || {
                on_page_change.run(total_pages.get().saturating_sub(1))
            })}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(size);
                }
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

fn nav_button(
    icon_name: &'static str,
    title: &'static str,
    disabled: impl Fn() -> bool + Send + Sync + 'static,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button class="pagination-btn" title=title disabled=disabled on:click=move |_| on_click()>
            {icon(icon_name)}
        </button>
    }
}
