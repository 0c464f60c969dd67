//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `supabase` implements the gate's session-provider and authorization-check
//! contracts over the hosted backend's REST endpoints.

pub mod supabase;
