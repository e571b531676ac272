//! API utilities for frontend-backend communication
//!
//! All calls go through the single GraphQL endpoint; see [`graphql`].

use crate::system::auth::storage;
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
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
    super::config::base_from_location(&protocol, &hostname)
}

/// Execute a GraphQL operation and return its `data`
///
/// Attaches the stored access token as a bearer token when there is one.
pub async fn graphql<V, T>(url: &str, request: &GraphQlRequest<'_, V>) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let mut builder = Request::post(url).header("Accept", "application/json");
    if let Some(token) = storage::get_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .json(request)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<GraphQlResponse<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
}
