//! REST request helper and the two login stages built on it.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpClient`] returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser. The pipeline depends on the [`ApiClient`] trait, so tests swap in
//! a scripted client.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A response whose body is a
//! valid envelope is returned whatever its HTTP status, because the server
//! reports authentication failures through the envelope's `error` field.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::{ApiError, LoginError};
use super::types::{Envelope, Method, Profile, User};
use crate::config::{LOGIN_PATH, PROFILE_PATH};
use crate::state::form::LoginForm;

/// Sends a method, path, and optional JSON body; returns the parsed envelope.
#[async_trait(?Send)]
pub trait ApiClient {
    /// Issue one request against the API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if no response arrives or its body is not an envelope.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Envelope, ApiError>;
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn decode_failed(status: u16, detail: impl std::fmt::Display) -> ApiError {
    ApiError::Decode { status, detail: detail.to_string() }
}

/// Browser HTTP client rooted at the configured API base.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Envelope, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = endpoint_url(&self.base_url, path);
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            }
            .credentials(web_sys::RequestCredentials::Include);
            let request = match body {
                Some(payload) => builder.json(&payload),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            serde_json::from_str::<Envelope>(&text).map_err(|e| decode_failed(status, e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// Stage 1: `POST auth/login` with the form as body.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] for an error envelope and
/// [`LoginError::Transport`] when the call itself fails.
pub async fn authenticate(api: &dyn ApiClient, form: &LoginForm) -> Result<(), LoginError> {
    api.request(Method::Post, LOGIN_PATH, Some(form.to_body()))
        .await?
        .into_result()?;
    Ok(())
}

/// Stage 2: `GET me`, returning the authenticated profile.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] for an error envelope,
/// [`LoginError::MissingProfile`] when no `result` is present, and
/// [`LoginError::Transport`] when the call itself fails.
pub async fn fetch_profile(api: &dyn ApiClient) -> Result<Profile, LoginError> {
    let success = api.request(Method::Get, PROFILE_PATH, None).await?.into_result()?;
    let user = success.result.ok_or(LoginError::MissingProfile)?;
    Ok(Profile { user: User(user), message: success.message })
}
