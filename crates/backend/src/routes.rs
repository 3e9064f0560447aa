use axum::{routing::get, Router};
use contracts::shared::ui_config::UiConfig;
use std::sync::Arc;

use crate::api::handlers;

/// Configure all application routes
pub fn configure_routes(ui_config: UiConfig) -> Router {
    let config_routes = Router::new()
        .route("/api/config/ui", get(handlers::config::get_ui_config))
        .with_state(Arc::new(ui_config));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D400 Dataset Overview (Home)
        .route(
            "/api/d400/records",
            get(handlers::d400_dataset_overview::get_records),
        )
        .route(
            "/api/d400/glossary",
            get(handlers::d400_dataset_overview::get_glossary),
        )
        // D401 KPI Dashboard
        .route(
            "/api/d401/kpi_summary",
            get(handlers::d401_kpi_dashboard::get_kpi_summary),
        )
        // D402 Marketing Report
        .route(
            "/api/d402/marketing_report",
            get(handlers::d402_marketing_report::get_marketing_report),
        )
        .merge(config_routes)
}
