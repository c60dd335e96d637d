//! HTTP API Client
//!
//! Functions for communicating with the presence analyzer REST API.

use gloo_net::http::Request;

use crate::state::global::{
    parse_weekday_totals, PresenceInterval, UserProfile, UserSummary, WeekdayMean, WeekdayTotal,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("presence_api_url") {
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

/// Issue a GET and decode the JSON body into `T`.
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the users listing for the dropdown
pub async fn fetch_users() -> Result<Vec<UserSummary>, String> {
    let api_base = get_api_base();
    get_json(&format!("{}/users", api_base)).await
}

/// Fetch the start/end presence intervals of one user, grouped by weekday
pub async fn fetch_presence_start_end(user_id: u32) -> Result<Vec<PresenceInterval>, String> {
    let api_base = get_api_base();
    get_json(&format!("{}/presence_start_end/{}", api_base, user_id)).await
}

/// Fetch the mean presence duration of one user per weekday
pub async fn fetch_mean_time_weekday(user_id: u32) -> Result<Vec<WeekdayMean>, String> {
    let api_base = get_api_base();
    get_json(&format!("{}/mean_time_weekday/{}", api_base, user_id)).await
}

/// Fetch the total presence duration of one user per weekday. The endpoint
/// prepends a header row, which is stripped here.
pub async fn fetch_presence_weekday(user_id: u32) -> Result<Vec<WeekdayTotal>, String> {
    let api_base = get_api_base();
    let raw: Vec<serde_json::Value> =
        get_json(&format!("{}/presence_weekday/{}", api_base, user_id)).await?;
    Ok(parse_weekday_totals(&raw))
}

/// Fetch a single user's profile (name and avatar)
pub async fn fetch_user_profile(user_id: u32) -> Result<UserProfile, String> {
    let api_base = get_api_base();
    get_json(&format!("{}/user/{}", api_base, user_id)).await
}
