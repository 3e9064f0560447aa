//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend, so API paths are same-origin.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// GET `url` and decode the JSON body
///
/// # Example
/// ```rust,ignore
/// let glossary: Vec<GlossaryEntry> = get_json("/api/d400/glossary").await?;
/// ```
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
