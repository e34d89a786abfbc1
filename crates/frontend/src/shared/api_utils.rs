//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing inference API URLs.

/// Build a full API URL from the configured base and an endpoint path
///
/// A trailing slash on `base` and a missing leading slash on `path` are
/// both tolerated.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://127.0.0.1:5000/", "/predict/qa");
/// assert_eq!(url, "http://127.0.0.1:5000/predict/qa");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
