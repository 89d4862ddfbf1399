//! Wire types for the Noteum REST API.
//!
//! DESIGN
//! ======
//! Every endpoint answers with the same envelope: either an `error` object or
//! a success payload carrying an optional `message` and `result`. The user
//! record is owned by the server, so it is kept as opaque JSON here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// HTTP methods used by the login screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Server-reported failure, e.g. `{"name":"AuthError","message":"bad creds"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub name: String,
    pub message: String,
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Parsed response envelope returned by the request helper.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

/// Success half of an [`Envelope`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Success {
    pub message: Option<String>,
    pub result: Option<serde_json::Value>,
}

impl Envelope {
    /// Split the envelope into its error or success half.
    ///
    /// # Errors
    ///
    /// Returns the server's error object when one is present.
    pub fn into_result(self) -> Result<Success, ApiErrorBody> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(Success { message: self.message, result: self.result }),
        }
    }
}

/// Authenticated user as returned by `GET me`. Shape is defined by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

impl User {
    /// Best-effort display name (`name`, then `username`, then `email`).
    pub fn display_name(&self) -> Option<&str> {
        ["name", "username", "email"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(serde_json::Value::as_str))
    }
}

/// Stage-2 output: the profile to store plus the server's greeting.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub user: User,
    pub message: Option<String>,
}
