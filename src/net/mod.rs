//! Networking modules for the Noteum REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the request helper and the two login stages, `types` defines the
//! response envelope, and `error` the failure taxonomy surfaced to the user.

pub mod api;
pub mod error;
pub mod types;
