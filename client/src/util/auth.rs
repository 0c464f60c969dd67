//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route and the login page apply the same guard decision, so
//! redirect rules live here rather than in each page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{GuardOutcome, LOGIN_PATH, evaluate};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where the login page sends an operator once access is granted.
pub const HOME_PATH: &str = "/";

/// True once the guard has settled on denying access.
pub fn should_redirect_to_login(state: &AuthState) -> bool {
    evaluate(state) == GuardOutcome::Denied
}

/// True once the guard would grant the protected landing page.
pub fn should_leave_login(state: &AuthState) -> bool {
    evaluate(state) == GuardOutcome::Granted
}

/// Replace-navigate to `/login` whenever the guard denies access.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_to_login) {
            navigate(LOGIN_PATH, replace());
        }
    });
}

/// Replace-navigate home once a sign-in has been authorized.
pub fn install_granted_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_leave_login) {
            navigate(HOME_PATH, replace());
        }
    });
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
