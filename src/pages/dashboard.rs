//! Dashboard landing page shown after login.
//!
//! Only a consumer of the session: it reads the user written by the login
//! pipeline and bounces unauthenticated visitors back to the login route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::LoginConfig;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::storage::{LocalStorageFlag, SessionFlag};

/// Greeting line for the current session.
fn greeting(state: &SessionState) -> String {
    match state.user.as_ref().and_then(|u| u.display_name()) {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<LoginConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let flag_set = LocalStorageFlag.is_set(&config.session_flag_key);

    install_unauth_redirect(session, flag_set, use_navigate());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || session.with(greeting)}</h1>
            </header>
        </div>
    }
}
