//! HTTP API Client
//!
//! Functions for communicating with the Limelight REST API.

use gloo_net::http::Request;

use crate::state::global::Figure;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("limelight_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct HandlesResponse {
    pub handles: Vec<String>,
    pub default_selection: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

// ============ API Functions ============

/// Fetch the dropdown options and the default selection
pub async fn fetch_handles() -> Result<HandlesResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/handles", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Post the current selection and get back the figure to draw
pub async fn fetch_chart(selected: &[String]) -> Result<Figure, String> {
    #[derive(serde::Serialize)]
    struct ChartRequest<'a> {
        selected: &'a [String],
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chart", api_base))
        .json(&ChartRequest { selected })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Extract the error message from a failed response
async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}
