use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d400_dataset_overview::{GlossaryEntry, RecordsPage, RecordsPageRequest};

use super::loaded_dataset;
use crate::dashboards::d400_dataset_overview::service;

/// GET /api/d400/records?page=0&page_size=100
pub async fn get_records(
    Query(request): Query<RecordsPageRequest>,
) -> Result<Json<RecordsPage>, StatusCode> {
    let dataset = loaded_dataset()?;
    let page = service::get_records_page(dataset.records(), request);

    tracing::info!(
        "D400 Overview: page {} of {} ({} rows)",
        page.page.saturating_add(1),
        page.total_pages.max(1),
        page.rows.len()
    );

    Ok(Json(page))
}

/// GET /api/d400/glossary
pub async fn get_glossary() -> Result<Json<Vec<GlossaryEntry>>, StatusCode> {
    service::get_glossary().map(Json).map_err(|e| {
        tracing::error!("Failed to load glossary: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
