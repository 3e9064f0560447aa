use crate::dashboards::d400_dataset_overview::api;
use crate::shared::components::order_table::OrderTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d400_dataset_overview::{GlossaryEntry, RecordsPage, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Home page: the full dataset and its column glossary
#[component]
pub fn DatasetOverview() -> impl IntoView {
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);

    let records = RwSignal::new(None::<RecordsPage>);
    let glossary = RwSignal::new(Vec::<GlossaryEntry>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Glossary is static, load it once
    spawn_local(async move {
        match api::get_glossary().await {
            Ok(entries) => glossary.set(entries),
            Err(e) => log::error!("Failed to load glossary: {}", e),
        }
    });

    // Reload the table page whenever paging changes
    Effect::new(move |_| {
        let current_page = page.get();
        let size = page_size.get();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let result = api::get_records(current_page, size).await;
            if page.get_untracked() != current_page || page_size.get_untracked() != size {
                return;
            }
            match result {
                Ok(response) => records.set(Some(response)),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let rows = Signal::derive(move || records.with(|r| r.as_ref().map(|r| r.rows.clone()).unwrap_or_default()));
    let offset = Signal::derive(move || page.get() * page_size.get());
    let total_pages = Signal::derive(move || records.with(|r| r.as_ref().map(|r| r.total_pages).unwrap_or(0)));
    let total_count = Signal::derive(move || records.with(|r| r.as_ref().map(|r| r.total_count).unwrap_or(0)));

    view! {
        <PageFrame page_id="d400_dataset_overview--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">"Dataset Overview"</h2>
            </div>
            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="page__error">
                        <strong>"⚠ Error: "</strong>
                        {err}
                    </div>
                })}
                {move || loading.get().then(|| view! {
                    <div class="page__loading">"Loading data..."</div>
                })}

                <OrderTable rows=rows offset=offset />
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=Callback::new(move |p| page.set(p))
                    on_page_size_change=Callback::new(move |size| {
                        page_size.set(size);
                        page.set(0);
                    })
                />

                <h3 class="page__subtitle">"📝 Column Descriptions"</h3>
                <table class="table table--glossary">
                    <thead>
                        <tr>
                            <th class="table__cell">"Column Name"</th>
                            <th class="table__cell">"Description"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || glossary.get()
                            key=|entry| entry.column.clone()
                            children=|entry| view! {
                                <tr>
                                    <td class="table__cell table__cell--code">{entry.column}</td>
                                    <td class="table__cell">{entry.description}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
