// src/error.rs

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the request pipeline and the typed endpoint wrappers.
///
/// Transport failures and authorization expiry are the pipeline's concern;
/// `Server` carries the backend's own `{ "error": "..." }` message so forms
/// can display it verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Token refresh failed terminally. The session has already been
    /// cleared; the embedding UI should send the user back to login.
    #[error("session expired, login required")]
    SessionExpired,

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Status code of an authoritative server rejection, if that is what
    /// this error is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
