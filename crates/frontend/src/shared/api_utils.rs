//! Helpers for talking to the transaction service.

/// Port the service listens on. The frontend is served separately during
/// development, so the API origin is derived rather than same-origin.
const API_PORT: u16 = 3000;

/// Base URL of the service, derived from the current window location.
/// Returns an empty string outside a browser context.
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
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
