//! Helpers for frontend-backend communication.

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Backend base URL: the page's host on port 3000
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full API URL for a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error body shape of 400 responses
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Read the server's `{"error": ...}` message when present
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP error: {}", status),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body; the raw response is returned so callers can branch on status
pub async fn post_json_raw<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = post_json_raw(path, body).await?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
