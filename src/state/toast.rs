//! Transient notification queue.
//!
//! The login pipeline pushes through the [`Notifier`] trait; the
//! `ToastHost` component renders the queue and dismisses entries.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
}

impl ToastStatus {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// A user-visible message with an optional detail line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub status: ToastStatus,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, status: ToastStatus::Success }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self { title: title.into(), description, status: ToastStatus::Error }
    }
}

/// Anything that can surface a [`Notification`] to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notification });
        id
    }

    /// Remove the toast with `id`; returns whether one was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, notification: Notification) {
        self.update(|s| {
            s.push(notification);
        });
    }
}
