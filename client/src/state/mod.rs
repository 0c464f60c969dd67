//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Only auth state is app-wide; page state stays local to its page.

pub mod auth;
