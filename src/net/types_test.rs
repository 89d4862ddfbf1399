use super::*;
use serde_json::json;

#[test]
fn method_as_str_is_uppercase_http_verb() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}

#[test]
fn envelope_with_error_yields_error_body() {
    let env: Envelope =
        serde_json::from_value(json!({"error": {"name": "AuthError", "message": "bad creds"}})).unwrap();
    let err = env.into_result().unwrap_err();
    assert_eq!(err.name, "AuthError");
    assert_eq!(err.message, "bad creds");
}

#[test]
fn envelope_without_error_yields_success_payload() {
    let env: Envelope = serde_json::from_value(json!({"message": "Welcome back", "result": {"id": 1}})).unwrap();
    let ok = env.into_result().unwrap();
    assert_eq!(ok.message.as_deref(), Some("Welcome back"));
    assert_eq!(ok.result, Some(json!({"id": 1})));
}

#[test]
fn empty_object_is_a_bare_success() {
    let env: Envelope = serde_json::from_value(json!({})).unwrap();
    assert_eq!(env.into_result().unwrap(), Success::default());
}

#[test]
fn envelope_ignores_unknown_fields() {
    let env: Envelope = serde_json::from_value(json!({"status": 200, "message": "ok"})).unwrap();
    assert_eq!(env.message.as_deref(), Some("ok"));
}

#[test]
fn user_serializes_transparently() {
    let user = User(json!({"id": 1}));
    assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": 1}));
}

#[test]
fn user_display_name_prefers_name_then_email() {
    assert_eq!(User(json!({"name": "Ada", "email": "a@b.com"})).display_name(), Some("Ada"));
    assert_eq!(User(json!({"email": "a@b.com"})).display_name(), Some("a@b.com"));
    assert_eq!(User(json!({"id": 1})).display_name(), None);
}
