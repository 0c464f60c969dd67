//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; access control is applied by
//! `components::protected_route` in the router, not inside pages.

pub mod home;
pub mod login;
