//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and query strings.

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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path and query pairs
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/insumos", &[("page".into(), "2".into())]);
/// ```
pub fn api_url(path: &str, params: &[(String, String)]) -> String {
    let query = query_string(params);
    if query.is_empty() {
        format!("{}{}", api_base(), path)
    } else {
        format!("{}{}?{}", api_base(), path, query)
    }
}

/// Кодирует пары в строку запроса без ведущего `?`
pub fn query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
