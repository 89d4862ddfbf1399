//! Login page: e-mail + password form driving the two-stage login pipeline.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{EMAIL_MAX_LEN, LoginConfig};
use crate::login::{LoginFlow, RouterNavigator};
use crate::net::api::HttpClient;
use crate::state::form::LoginFormState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::storage::LocalStorageFlag;

pub const HEADING: &str = "Login with your Noteum account";
pub const EMAIL_ERROR: &str = "Invalid e-mail!";
pub const PASSWORD_ERROR: &str = "Password must not be an empty string!";
pub const SIGNUP_PROMPT: &str = "New to Noteum? Sign up here";

/// Label of the submit button for the current busy state.
fn continue_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Continue" }
}

/// CSS class of a form field wrapper.
fn field_class(invalid: bool) -> &'static str {
    if invalid { "login-field login-field--invalid" } else { "login-field" }
}

/// The submit control is disabled while busy or while either field fails validation.
fn submit_disabled(busy: bool, state: &LoginFormState) -> bool {
    busy || !state.can_submit()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<LoginConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginFormState::default());
    let busy = RwSignal::new(false);

    let on_submit = {
        let config = config.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submit_disabled(busy.get_untracked(), &form.get_untracked()) {
                return;
            }
            let credentials = form.with_untracked(|s| s.form.clone());
            let config = config.clone();
            let navigator = RouterNavigator(navigate.clone());

            leptos::task::spawn_local(async move {
                let api = HttpClient::new(config.api_base.clone());
                let flow = LoginFlow {
                    api: &api,
                    session: &session,
                    flag: &LocalStorageFlag,
                    navigator: &navigator,
                    notifier: &toasts,
                    busy: &busy,
                    config: &config,
                };
                flow.submit(&credentials).await;
            });
        }
    };

    let on_signup = move |_| navigate(&config.signup_route, NavigateOptions::default());

    view! {
        <div class="login-page">
            <div class="login-layout">
                <h1 class="login-heading">{HEADING}</h1>
                <div class="login-divider"></div>
                <div class="login-column">
                    <form class="login-card" novalidate=true on:submit=on_submit>
                        <div class=move || form.with(|s| field_class(s.invalid.email))>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="E-mail"
                                maxlength=EMAIL_MAX_LEN.to_string()
                                prop:value=move || form.with(|s| s.form.email.clone())
                                on:input=move |ev| form.update(|s| s.on_email_input(event_target_value(&ev)))
                                on:focus=move |_| form.update(LoginFormState::on_email_focus)
                            />
                            <Show when=move || form.with(|s| s.invalid.email)>
                                <p class="login-field__error">{EMAIL_ERROR}</p>
                            </Show>
                        </div>
                        <div class=move || form.with(|s| field_class(s.invalid.password))>
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || form.with(|s| s.form.password.clone())
                                on:input=move |ev| form.update(|s| s.on_password_input(event_target_value(&ev)))
                                on:focus=move |_| form.update(LoginFormState::on_password_focus)
                            />
                            <Show when=move || form.with(|s| s.invalid.password)>
                                <p class="login-field__error">{PASSWORD_ERROR}</p>
                            </Show>
                            <button class="login-link login-link--forgot" type="button">
                                "Forgot password?"
                            </button>
                        </div>
                        <button
                            class="login-button"
                            type="submit"
                            aria-busy=move || busy.get().to_string()
                            disabled=move || form.with(|s| submit_disabled(busy.get(), s))
                        >
                            {move || continue_label(busy.get())}
                            <span class="login-button__arrow" aria-hidden="true">"→"</span>
                        </button>
                    </form>
                    <button class="login-link" type="button" on:click=on_signup>
                        {SIGNUP_PROMPT}
                        <span class="login-button__arrow" aria-hidden="true">"→"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
