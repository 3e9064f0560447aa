use contracts::dashboards::d400_dataset_overview::{GlossaryEntry, RecordsPage};

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/d400";

/// Get one page of the full order table
pub async fn get_records(page: usize, page_size: usize) -> Result<RecordsPage, String> {
    let url = format!("{}/records?page={}&page_size={}", API_BASE, page, page_size);
    get_json(&url).await
}

/// Get column descriptions
pub async fn get_glossary() -> Result<Vec<GlossaryEntry>, String> {
    get_json(&format!("{}/glossary", API_BASE)).await
}
