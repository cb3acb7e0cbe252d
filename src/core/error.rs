//! Custom error types for the application.
//!
//! Errors are layered from transport up to the record browser:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ServiceError`] - Record service failures (transport, not found, validation)
//! - [`ZoneError`] - Zone names rejected before any request is made
//! - [`BrowserError`] - What record browser operations return

use thiserror::Error;

use crate::models::RecordId;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status) with the response body
    #[error("HTTP error: {status}")]
    HttpError { status: u16, body: String },
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failures reported by a record service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Service unreachable or answered with something unusable.
    #[error("record service unavailable: {0}")]
    Transport(String),
    /// Zone or record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The service rejected the request as malformed.
    #[error("rejected by record service: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Message carried in `{"error": "..."}` bodies.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

fn body_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

impl From<FetchError> for ServiceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::HttpError { status: 404, body } => Self::NotFound(body_message(&body, 404)),
            FetchError::HttpError {
                status: status @ (400 | 422),
                body,
            } => Self::Validation(body_message(&body, status)),
            FetchError::HttpError { status, body } => Self::Transport(body_message(&body, status)),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Zone names rejected locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("zone name is too long ({0} characters, max 253)")]
    TooLong(usize),
    #[error("invalid zone name: {0}")]
    Malformed(String),
}

/// Errors returned by record browser operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    InvalidZone(#[from] ZoneError),
    /// A newer fetch started before this one finished; its result was dropped.
    #[error("superseded by a newer fetch")]
    Superseded,
    /// The state owner is gone (component unmounted).
    #[error("record browser is no longer mounted")]
    Detached,
}

/// A single failed delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFailure {
    pub id: RecordId,
    pub error: ServiceError,
}
