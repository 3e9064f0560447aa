use axum::{extract::State, Json};
use contracts::shared::ui_config::UiConfig;
use std::sync::Arc;

/// GET /api/config/ui
pub async fn get_ui_config(State(ui): State<Arc<UiConfig>>) -> Json<UiConfig> {
    Json(ui.as_ref().clone())
}
