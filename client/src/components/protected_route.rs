//! Route wrapper that suspends protected content until access is granted.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the app-wide `RwSignal<AuthState>` and performs no I/O. The render
//! decision comes from `gate::evaluate`; navigation to `/login` is a side
//! effect installed alongside it so a denied state never renders children.

use gate::{GuardOutcome, evaluate};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_guard_redirect;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let outcome = Memo::new(move |_| auth.with(evaluate));

    install_guard_redirect(auth, use_navigate());

    move || match outcome.get() {
        GuardOutcome::Pending => view! {
            <div class="auth-pending" role="status" aria-live="polite">
                <span class="auth-pending__spinner"></span>
                "Checking access..."
            </div>
        }
        .into_any(),
        GuardOutcome::Denied => ().into_any(),
        GuardOutcome::Granted => children().into_any(),
    }
}
