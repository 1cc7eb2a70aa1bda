//! URL handling for the chat endpoint.
//!
//! Normalizes the base URL so endpoint construction never produces double
//! slashes, regardless of how the base was written in config or on the CLI.

use crate::core::constants::CHAT_PATH;

/// Remove trailing slashes from a base URL.
///
/// ```
/// use bulle::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// The full URL the widget POSTs each message to.
///
/// ```
/// use bulle::utils::url::chat_url;
///
/// assert_eq!(chat_url("http://localhost:8000"), "http://localhost:8000/chat");
/// assert_eq!(chat_url("http://localhost:8000/"), "http://localhost:8000/chat");
/// ```
pub fn chat_url(base_url: &str) -> String {
    format!("{}/{}", normalize_base_url(base_url), CHAT_PATH)
}
