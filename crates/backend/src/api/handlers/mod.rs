use axum::http::StatusCode;

use crate::shared::data::dataset::{get_dataset, Dataset};

// Dashboard handlers (d400-d402)
pub mod d400_dataset_overview;
pub mod d401_kpi_dashboard;
pub mod d402_marketing_report;

// System
pub mod config;

/// The loaded order table, or 503 while it is unavailable
pub(crate) fn loaded_dataset() -> Result<&'static Dataset, StatusCode> {
    get_dataset().ok_or_else(|| {
        tracing::error!("Dataset requested before it was loaded");
        StatusCode::SERVICE_UNAVAILABLE
    })
}
