//! Failure taxonomy for the login pipeline.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every variant maps to a transient notification and
//! leaves the form editable for a user-initiated retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ApiErrorBody;
use crate::state::toast::Notification;

/// Errors produced by the request helper itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// A response arrived but its body is not a valid envelope.
    #[error("unexpected response (status {status}): {detail}")]
    Decode { status: u16, detail: String },

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Errors that end a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server answered with an error envelope.
    #[error("{0}")]
    Rejected(ApiErrorBody),

    /// The request helper could not complete the call.
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// `GET me` succeeded but carried no `result`.
    #[error("profile response did not include a user")]
    MissingProfile,
}

impl LoginError {
    /// Stable machine-readable code used in logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "E_REJECTED",
            Self::Transport(_) => "E_TRANSPORT",
            Self::MissingProfile => "E_MISSING_PROFILE",
        }
    }

    /// User-facing notification for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Rejected(body) => Notification::error(&body.name, Some(body.message.clone())),
            Self::Transport(err) => Notification::error("Network error", Some(err.to_string())),
            Self::MissingProfile => {
                Notification::error("Login failed", Some("Could not load your profile.".to_owned()))
            }
        }
    }
}

impl From<ApiErrorBody> for LoginError {
    fn from(body: ApiErrorBody) -> Self {
        Self::Rejected(body)
    }
}
