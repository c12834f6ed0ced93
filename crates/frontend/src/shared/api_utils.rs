//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend itself, so API requests go to the
//! same origin the page was loaded from, whatever port the server runs on.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Build the URL for an API path
///
/// Requests stay on the page's origin: the result is always a root-relative
/// path, never a host or port.
///
/// # Arguments
/// * `path` - The API path, with or without the leading "/"
///
/// # Returns
/// - Root-relative URL like "/api/d400/default_range"
///
/// # Example
/// ```ignore
/// let url = api_url("/api/d400/default_range");
/// assert_eq!(url, "/api/d400/default_range");
/// ```
pub fn api_url(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// GET a JSON document from the backend
///
/// # Returns
/// - The deserialized body for a 2xx response
/// - `Err` with a display string when the request fails, the status is not
///   2xx (the body text is appended when present) or the body is not valid JSON
///
/// # Example
/// ```ignore
/// let range: SalesOverviewRequest = get_json("/api/d400/default_range").await?;
/// ```
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return if body.is_empty() {
            Err(format!("HTTP error: {}", response.status()))
        } else {
            Err(format!("HTTP error: {} ({})", response.status(), body))
        };
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
