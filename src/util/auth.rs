//! Shared auth-gating helpers for pages behind the login screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior:
//! leave only when neither a session user nor the persisted flag exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_ROUTE;
use crate::state::session::SessionState;

/// Whether a gated page should bounce the visitor to the login route.
pub fn should_redirect_unauth(state: &SessionState, flag_set: bool) -> bool {
    state.user.is_none() && !flag_set
}

/// Redirect to the login route whenever [`should_redirect_unauth`] holds.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, flag_set: bool, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(|state| should_redirect_unauth(state, flag_set)) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
