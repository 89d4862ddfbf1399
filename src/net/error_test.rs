use super::*;
use crate::state::toast::ToastStatus;

fn rejected() -> LoginError {
    LoginError::Rejected(ApiErrorBody { name: "AuthError".to_owned(), message: "bad creds".to_owned() })
}

#[test]
fn rejected_notification_uses_server_name_and_message() {
    let n = rejected().notification();
    assert_eq!(n.title, "AuthError");
    assert_eq!(n.description.as_deref(), Some("bad creds"));
    assert_eq!(n.status, ToastStatus::Error);
}

#[test]
fn transport_notification_is_distinct_from_rejection() {
    let err = LoginError::from(ApiError::Transport("offline".to_owned()));
    let n = err.notification();
    assert_eq!(n.title, "Network error");
    assert_eq!(n.description.as_deref(), Some("request failed: offline"));
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(rejected().error_code(), "E_REJECTED");
    assert_eq!(LoginError::from(ApiError::Unavailable).error_code(), "E_TRANSPORT");
    assert_eq!(LoginError::MissingProfile.error_code(), "E_MISSING_PROFILE");
}

#[test]
fn display_formats_rejection_and_decode() {
    assert_eq!(rejected().to_string(), "AuthError: bad creds");
    let decode = ApiError::Decode { status: 502, detail: "expected value".to_owned() };
    assert_eq!(decode.to_string(), "unexpected response (status 502): expected value");
}
