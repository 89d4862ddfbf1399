//! Login form values and per-field validation flags.
//!
//! DESIGN
//! ======
//! Each input handler recomputes only its own field's flag, so an edit to one
//! field can never overwrite the other field's flag with a stale copy.
//! Whether the form may be submitted is derived from the current values, not
//! from the flags, which only drive inline error display.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::{Deserialize, Serialize};

use crate::config::EMAIL_MAX_LEN;
use crate::util::validate::{email_is_invalid, password_is_invalid};

/// Credentials as typed by the user; also the `POST auth/login` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// JSON body for `POST auth/login`.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "email": self.email, "password": self.password })
    }

    /// Whether both fields pass validation.
    pub fn is_submittable(&self) -> bool {
        !(email_is_invalid(&self.email) || password_is_invalid(&self.password))
    }
}

/// Per-field "currently shown as invalid" flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Validity {
    pub email: bool,
    pub password: bool,
}

/// Form values plus their inline validation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub form: LoginForm,
    pub invalid: Validity,
}

impl LoginFormState {
    pub fn on_email_input(&mut self, value: String) {
        let value = clamp_email_input(value);
        self.invalid.email = email_is_invalid(&value);
        self.form.email = value;
    }

    pub fn on_password_input(&mut self, value: String) {
        self.invalid.password = password_is_invalid(&value);
        self.form.password = value;
    }

    /// Focusing an empty e-mail field marks it invalid before any keystroke.
    pub fn on_email_focus(&mut self) {
        if self.form.email.is_empty() {
            self.invalid.email = true;
        }
    }

    /// Focusing an empty password field marks it invalid before any keystroke.
    pub fn on_password_focus(&mut self) {
        if self.form.password.is_empty() {
            self.invalid.password = true;
        }
    }

    /// The submit control is enabled iff both current values validate.
    pub fn can_submit(&self) -> bool {
        self.form.is_submittable()
    }
}

/// Cap e-mail input at [`EMAIL_MAX_LEN`] UTF-16 code units, the unit a browser
/// `maxlength` counts in. A character that would straddle the cap is dropped.
pub fn clamp_email_input(mut value: String) -> String {
    let mut units = 0;
    let cut = value.char_indices().find_map(|(idx, c)| {
        units += c.len_utf16();
        (units > EMAIL_MAX_LEN).then_some(idx)
    });
    if let Some(idx) = cut {
        value.truncate(idx);
    }
    value
}
