use super::*;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;

// =============================================================
// ScriptedApi
// =============================================================

struct ScriptedApi {
    replies: RefCell<VecDeque<Result<Envelope, ApiError>>>,
    calls: RefCell<Vec<(Method, String, Option<serde_json::Value>)>>,
}

impl ScriptedApi {
    fn new(replies: Vec<Result<Envelope, ApiError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), calls: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl ApiClient for ScriptedApi {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Envelope, ApiError> {
        self.calls.borrow_mut().push((method, path.to_owned(), body));
        self.replies.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unavailable))
    }
}

fn envelope(value: serde_json::Value) -> Result<Envelope, ApiError> {
    Ok(serde_json::from_value(value).unwrap())
}

fn form() -> LoginForm {
    LoginForm { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

// =============================================================
// endpoint_url
// =============================================================

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("/api", "auth/login"), "/api/auth/login");
    assert_eq!(endpoint_url("/api/", "/me"), "/api/me");
    assert_eq!(endpoint_url("https://api.noteum.test", "me"), "https://api.noteum.test/me");
}

#[test]
fn endpoint_url_with_empty_base_is_root_relative() {
    assert_eq!(endpoint_url("", "me"), "/me");
}

#[test]
fn decode_failed_carries_status() {
    assert_eq!(
        decode_failed(500, "eof"),
        ApiError::Decode { status: 500, detail: "eof".to_owned() }
    );
}

// =============================================================
// HttpClient
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_client_is_unavailable_outside_browser() {
    let client = HttpClient::new("/api");
    let err = client.request(Method::Get, "me", None).await.unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}

// =============================================================
// authenticate
// =============================================================

#[tokio::test]
async fn authenticate_posts_form_to_login_path() {
    let api = ScriptedApi::new(vec![envelope(json!({"message": "ok"}))]);
    authenticate(&api, &form()).await.unwrap();

    let calls = api.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Method::Post);
    assert_eq!(calls[0].1, "auth/login");
    assert_eq!(calls[0].2, Some(json!({"email": "a@b.com", "password": "x"})));
}

#[tokio::test]
async fn authenticate_maps_error_envelope_to_rejected() {
    let api = ScriptedApi::new(vec![envelope(json!({"error": {"name": "AuthError", "message": "bad creds"}}))]);
    let err = authenticate(&api, &form()).await.unwrap_err();
    assert_eq!(err.error_code(), "E_REJECTED");
    assert_eq!(err.to_string(), "AuthError: bad creds");
}

#[tokio::test]
async fn authenticate_maps_transport_failure() {
    let api = ScriptedApi::new(vec![Err(ApiError::Transport("offline".to_owned()))]);
    let err = authenticate(&api, &form()).await.unwrap_err();
    assert_eq!(err, LoginError::Transport(ApiError::Transport("offline".to_owned())));
}

// =============================================================
// fetch_profile
// =============================================================

#[tokio::test]
async fn fetch_profile_gets_me_and_returns_result() {
    let api = ScriptedApi::new(vec![envelope(json!({"message": "Welcome", "result": {"id": 1}}))]);
    let profile = fetch_profile(&api).await.unwrap();
    assert_eq!(profile.user, User(json!({"id": 1})));
    assert_eq!(profile.message.as_deref(), Some("Welcome"));

    let calls = api.calls.borrow();
    assert_eq!(calls[0].0, Method::Get);
    assert_eq!(calls[0].1, "me");
    assert_eq!(calls[0].2, None);
}

#[tokio::test]
async fn fetch_profile_without_result_is_missing_profile() {
    let api = ScriptedApi::new(vec![envelope(json!({"message": "Welcome"}))]);
    assert_eq!(fetch_profile(&api).await.unwrap_err(), LoginError::MissingProfile);
}
