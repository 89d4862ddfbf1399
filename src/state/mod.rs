//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `session`, `toast`) so the page and the
//! login pipeline can depend on small focused models.

pub mod form;
pub mod session;
pub mod toast;
