//! Login pipeline and the seams it is driven through.
//!
//! SYSTEM CONTEXT
//! ==============
//! `flow` runs the "authenticate, then fetch profile" chain. The traits here
//! cover the two collaborators that have no better home: route changes and
//! the page's busy indicator.

pub mod flow;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub use flow::{IgnoreReason, LoginFlow, LoginOutcome, Phase};

/// Changes the displayed route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Adapts `leptos_router`'s navigate function to [`Navigator`].
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// UI-only flag preventing resubmission while a request is outstanding.
pub trait BusyFlag {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

impl BusyFlag for RwSignal<bool> {
    fn is_busy(&self) -> bool {
        self.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}
