//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared rendering
//! to `components`.

pub mod dashboard;
pub mod login;
