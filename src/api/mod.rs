//! HTTP client for the Agnet backend.
//!
//! Each operation lives in its own module and is exposed both as a method on
//! [`Api`] and as a free async function that resolves the client from the
//! environment, the shape the views call.

pub mod auth;
pub mod chat;
pub mod profile;

pub use auth::authenticate;
pub use chat::send_chat;
pub use profile::{HistoryItem, Profile, fetch_history, fetch_profile};

use anyhow::{Context, Result};
use std::env;

/// Used when neither the environment nor the bundled config names a backend.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001/api/v1";

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a failure status. Carries the
    /// server-supplied detail when present, a status-derived message
    /// otherwise.
    #[error("{0}")]
    Api(String),
    /// No response arrived at all. The message is specific to the operation
    /// that failed, so the user sees a connectivity hint, not a status code.
    #[error("{0}")]
    Network(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

pub struct Api {
    http: reqwest::Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolve the backend from `AGNET_API_BASE_URL` (set via .env or the
    /// bundled config), falling back to the local development default.
    pub fn from_env() -> Result<Self> {
        let base = env::var("AGNET_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        reqwest::Url::parse(&base).with_context(|| format!("invalid API base URL: {base}"))?;
        Ok(Self::new(base))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pull the `detail` field out of a JSON failure body, the error shape the
/// backend uses across every endpoint.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|detail| detail.to_string())
}

pub(crate) fn failure_message(body: &str, fallback: impl Into<String>) -> String {
    error_detail(body).unwrap_or_else(|| fallback.into())
}

/// Generic fallback derived from the HTTP status line.
pub(crate) fn status_message(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Error: {reason}"),
        None => format!("Error: {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_extracted_from_failure_body() {
        assert_eq!(
            error_detail(r#"{"detail": "Incorrect email or password"}"#),
            Some("Incorrect email or password".to_string())
        );
    }

    #[test]
    fn test_error_detail_absent_or_unusable() {
        assert_eq!(error_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(error_detail("not json"), None);
        // FastAPI validation failures put an array under `detail`.
        assert_eq!(error_detail(r#"{"detail": [{"loc": []}]}"#), None);
    }

    #[test]
    fn test_failure_message_prefers_detail() {
        assert_eq!(
            failure_message(r#"{"detail": "Email already registered"}"#, "fallback"),
            "Email already registered"
        );
        assert_eq!(failure_message("{}", "fallback"), "fallback");
    }

    #[test]
    fn test_status_message_uses_reason_phrase() {
        assert_eq!(
            status_message(reqwest::StatusCode::UNAUTHORIZED),
            "Error: Unauthorized"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = Api::new("http://localhost:8001/api/v1/");
        assert_eq!(api.url("/chat/"), "http://localhost:8001/api/v1/chat/");
    }
}
