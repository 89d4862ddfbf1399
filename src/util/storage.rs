//! Browser `localStorage` helpers for the persisted session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the login
//! pipeline can persist state without repeating web-sys glue. Outside the
//! browser every call is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Persisted boolean marker that outlives the login view.
pub trait SessionFlag {
    /// Whether `key` currently holds a truthy value.
    fn is_set(&self, key: &str) -> bool;
    /// Write `value` under `key`.
    fn set(&self, key: &str, value: bool);
}

/// [`SessionFlag`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageFlag;

impl SessionFlag for LocalStorageFlag {
    fn is_set(&self, key: &str) -> bool {
        read_raw(key).is_some_and(|raw| flag_is_truthy(&raw))
    }

    fn set(&self, key: &str, value: bool) {
        write_raw(key, flag_value(value));
    }
}

/// Storage representation of a flag, as `localStorage.setItem(key, true)` writes it.
pub(crate) fn flag_value(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Anything other than an empty string, `"false"`, `"0"`, or `"null"` counts as set.
pub(crate) fn flag_is_truthy(raw: &str) -> bool {
    !matches!(raw.trim(), "" | "false" | "0" | "null")
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_raw(key: &str, raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}
