//! Toast stack rendering the notification queue.
//!
//! Each toast can be closed by hand and dismisses itself after the configured
//! duration. Timers only exist in the browser build.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::config::LoginConfig;
use crate::state::toast::{Notification, Toast, ToastState, ToastStatus};

fn toast_class(status: ToastStatus) -> String {
    format!("toast {}", status.css_modifier())
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|s| s.items.clone())
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<LoginConfig>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(config.toast_duration_ms, move || {
        toasts.try_update(|s| s.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let Notification { title, description, status } = toast.notification;

    view! {
        <div class=toast_class(status)>
            <div class="toast__body">
                <p class="toast__title">{title}</p>
                {description.map(|text| view! { <p class="toast__description">{text}</p> })}
            </div>
            <button
                class="toast__close"
                type="button"
                aria-label="Close"
                on:click=move |_| {
                    toasts.try_update(|s| s.dismiss(id));
                }
            >
                "×"
            </button>
        </div>
    }
}
