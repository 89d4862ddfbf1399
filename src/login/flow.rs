//! Two-stage login pipeline.
//!
//! DESIGN
//! ======
//! Stage 1 (`POST auth/login`) and stage 2 (`GET me`) are plain async fns
//! returning typed results, chained with `?`, so a stage-1 failure never
//! issues stage 2. All side effects happen after the chain resolves, and only
//! on success:
//!
//! 1. session user := `me.result`
//! 2. success notification with `me.message`
//! 3. busy off
//! 4. persisted flag := true
//! 5. navigate to the dashboard
//!
//! A failure notifies, clears busy, and touches nothing else. There is no
//! timeout, cancellation, or automatic retry.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use super::{BusyFlag, Navigator};
use crate::config::LoginConfig;
use crate::net::api::{ApiClient, authenticate, fetch_profile};
use crate::net::error::LoginError;
use crate::net::types::Profile;
use crate::state::form::LoginForm;
use crate::state::session::SessionStore;
use crate::state::toast::{Notification, Notifier};
use crate::util::storage::SessionFlag;

/// Title used when `GET me` carries no `message`.
pub const DEFAULT_SUCCESS_TITLE: &str = "Logged in";

/// Per-submit state machine: `Idle -> Submitting -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

impl Phase {
    pub fn from_busy(busy: bool) -> Self {
        if busy { Self::Submitting } else { Self::Idle }
    }
}

/// Why a submit was dropped before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A previous submit is still in flight.
    Busy,
    /// At least one field fails validation.
    Invalid,
}

/// Result of one call to [`LoginFlow::submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Session user stored, flag persisted, dashboard requested.
    Established,
    /// A stage failed; the user was notified and the form stays editable.
    Failed(LoginError),
    /// Nothing was sent.
    Ignored(IgnoreReason),
}

/// Borrowed collaborators for one login attempt.
pub struct LoginFlow<'a> {
    pub api: &'a dyn ApiClient,
    pub session: &'a dyn SessionStore,
    pub flag: &'a dyn SessionFlag,
    pub navigator: &'a dyn Navigator,
    pub notifier: &'a dyn Notifier,
    pub busy: &'a dyn BusyFlag,
    pub config: &'a LoginConfig,
}

impl LoginFlow<'_> {
    pub fn phase(&self) -> Phase {
        Phase::from_busy(self.busy.is_busy())
    }

    /// Run the full pipeline for `form`.
    pub async fn submit(&self, form: &LoginForm) -> LoginOutcome {
        if self.phase() == Phase::Submitting {
            return LoginOutcome::Ignored(IgnoreReason::Busy);
        }
        if !form.is_submittable() {
            return LoginOutcome::Ignored(IgnoreReason::Invalid);
        }

        self.busy.set_busy(true);
        match self.run_stages(form).await {
            Ok(profile) => {
                self.establish(profile);
                LoginOutcome::Established
            }
            Err(err) => {
                leptos::logging::warn!("login failed: code={} error={err}", err.error_code());
                self.notifier.notify(err.notification());
                self.busy.set_busy(false);
                LoginOutcome::Failed(err)
            }
        }
    }

    async fn run_stages(&self, form: &LoginForm) -> Result<Profile, LoginError> {
        authenticate(self.api, form).await?;
        fetch_profile(self.api).await
    }

    fn establish(&self, profile: Profile) {
        let Profile { user, message } = profile;
        self.session.set_user(user);
        self.notifier
            .notify(Notification::success(message.unwrap_or_else(|| DEFAULT_SUCCESS_TITLE.to_owned())));
        self.busy.set_busy(false);
        self.flag.set(&self.config.session_flag_key, true);
        leptos::logging::log!("login succeeded; routing to {}", self.config.dashboard_route);
        self.navigator.navigate(&self.config.dashboard_route);
    }
}
