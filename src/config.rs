//! Client configuration for the login screen.
//!
//! DESIGN
//! ======
//! The browser build has no process environment, so overrides are baked in at
//! compile time with `option_env!`. Every value has a typed default matching
//! the hosted Noteum deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 2000;
pub const DEFAULT_SESSION_FLAG_KEY: &str = "auth";
pub const EMAIL_MAX_LEN: usize = 40;

pub const LOGIN_PATH: &str = "auth/login";
pub const PROFILE_PATH: &str = "me";

pub const LOGIN_ROUTE: &str = "/auth/login";
pub const SIGNUP_ROUTE: &str = "/auth/signup";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Typed settings shared by the login page, the pipeline, and the toast host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Prefix every API path is joined onto (e.g. `/api` or `https://api.noteum.app`).
    pub api_base: String,
    /// `localStorage` key of the persisted session flag.
    pub session_flag_key: String,
    /// How long a notification stays on screen.
    pub toast_duration_ms: u32,
    /// Route shown after a successful login.
    pub dashboard_route: String,
    /// Route of the sign-up screen linked from the login form.
    pub signup_route: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            session_flag_key: DEFAULT_SESSION_FLAG_KEY.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            dashboard_route: DASHBOARD_ROUTE.to_owned(),
            signup_route: SIGNUP_ROUTE.to_owned(),
        }
    }
}

impl LoginConfig {
    /// Build the config from compile-time overrides.
    ///
    /// - `NOTEUM_API_BASE`: API prefix, default `/api`
    /// - `NOTEUM_TOAST_MS`: notification lifetime in ms, default 2000
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("NOTEUM_API_BASE"), option_env!("NOTEUM_TOAST_MS"))
    }

    fn from_overrides(api_base: Option<&str>, toast_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.api_base.clone(), |v| v.trim_end_matches('/').to_owned());
        let toast_duration_ms = toast_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(defaults.toast_duration_ms);
        Self { api_base, toast_duration_ms, ..defaults }
    }
}
