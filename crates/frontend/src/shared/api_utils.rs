//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

/// localStorage key that overrides the backend base URL for a deployment
/// (e.g. a tunnel address). Absent or blank, the base is derived from the
/// page's own location.
pub const API_BASE_KEY: &str = "rag_api_base";

/// Header that tells a reverse-tunnel host (ngrok and friends) to skip its
/// interstitial browser-warning page and serve the API response directly.
pub const TUNNEL_SKIP_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

/// Get the base URL for API requests
///
/// Checks localStorage for a deployment override first, then falls back to
/// the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.ngrok-free.app"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(stored) = storage().and_then(|s| s.get_item(API_BASE_KEY).ok().flatten()) {
        let stored = stored.trim();
        if !stored.is_empty() {
            return stored.trim_end_matches('/').to_string();
        }
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
