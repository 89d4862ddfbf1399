//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context by the app shell. The login
//! pipeline is the only writer; the dashboard and any other identity-aware
//! page only read it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    /// Record `user` as the authenticated user.
    pub fn establish(&mut self, user: User) {
        self.user = Some(user);
    }
}

/// Injectable handle on the process-wide session user.
pub trait SessionStore {
    fn user(&self) -> Option<User>;
    fn set_user(&self, user: User);
}

impl SessionStore for RwSignal<SessionState> {
    fn user(&self) -> Option<User> {
        self.with_untracked(|s| s.user.clone())
    }

    fn set_user(&self, user: User) {
        self.update(|s| s.establish(user));
    }
}
