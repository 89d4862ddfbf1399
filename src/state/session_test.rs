use super::*;
use serde_json::json;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
}

// =============================================================
// establish
// =============================================================

#[test]
fn establish_sets_user() {
    let mut state = SessionState { user: None };
    state.establish(User(json!({"id": 1})));
    assert_eq!(state.user, Some(User(json!({"id": 1}))));
}

#[test]
fn establish_replaces_previous_user() {
    let mut state = SessionState::default();
    state.establish(User(json!({"id": 1})));
    state.establish(User(json!({"id": 2})));
    assert_eq!(state.user, Some(User(json!({"id": 2}))));
}

// =============================================================
// SessionStore for RwSignal<SessionState>
// =============================================================

#[test]
fn signal_store_reads_back_written_user() {
    let session = RwSignal::new(SessionState::default());
    assert_eq!(session.user(), None);

    session.set_user(User(json!({"id": 1})));

    assert_eq!(session.user(), Some(User(json!({"id": 1}))));
    assert_eq!(session.get_untracked().user, Some(User(json!({"id": 1}))));
}
