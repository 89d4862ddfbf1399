//! Utility helpers shared across the login UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic to
//! improve reuse and testability.

pub mod auth;
pub mod storage;
pub mod validate;
