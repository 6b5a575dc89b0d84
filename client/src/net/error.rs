//! Error type shared by REST helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// REST calls only run in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling the human-readable reason out of the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: error_message(status, body) }
    }

    /// HTTP status when the backend rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend no longer accepts the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Extract the backend's `message` (or legacy `msg`) field from an error body.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "msg", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}
