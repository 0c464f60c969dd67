//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RwSignal<AuthState>` is provided as context at the app root and read by
//! route guards and identity-aware components. Only the gate's auth context
//! writes it, through [`SignalSink`], always as a whole value.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

pub use gate::AuthState;
use gate::StateSink;
use leptos::prelude::*;

/// Publishes gate state into the app-wide signal.
///
/// Writes after the owning UI is disposed are dropped.
#[derive(Clone, Copy)]
pub struct SignalSink(pub RwSignal<AuthState>);

impl StateSink for SignalSink {
    fn apply(&self, state: AuthState) {
        let _ = self.0.try_set(state);
    }
}

/// Email of the signed-in operator, for display.
pub fn display_email(state: &AuthState) -> Option<String> {
    state.user.as_ref().and_then(|u| u.email.clone())
}

#[cfg(feature = "hydrate")]
pub use browser::{AuthActions, BrowserAuth, start};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gate::{AuthContext, AuthorizationCache, ProviderError};
    use leptos::prelude::*;
    use leptos::reactive::owner::LocalStorage;

    use super::{AuthState, SignalSink};
    use crate::components::toast::{ToastNotifier, ToastState};
    use crate::config::ClientConfig;
    use crate::net::supabase::SupabaseBackend;
    use crate::util::storage::LocalStorageStore;

    pub type BrowserAuth =
        AuthContext<SupabaseBackend<LocalStorageStore>, LocalStorageStore, SignalSink, ToastNotifier>;

    /// Copyable handle to the browser auth context for event handlers.
    #[derive(Clone, Copy)]
    pub struct AuthActions(StoredValue<Rc<BrowserAuth>, LocalStorage>);

    impl AuthActions {
        /// Start a password sign-in; `on_error` receives the provider's
        /// rejection. Success is observed through the auth signal.
        pub fn sign_in(self, email: String, password: String, on_error: impl FnOnce(ProviderError) + 'static) {
            let ctx = self.0.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = ctx.sign_in(&email, &password).await {
                    on_error(e);
                }
            });
        }

        pub fn sign_out(self) {
            let ctx = self.0.get_value();
            leptos::task::spawn_local(async move {
                ctx.sign_out().await;
            });
        }
    }

    /// Build the auth context, provide [`AuthActions`], and run bootstrap
    /// plus the session subscription until the owner is cleaned up.
    pub fn start(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
        let config = ClientConfig::from_document();
        if config.is_none() {
            log::error!("backend configuration missing from page; every session will be denied");
        }
        let ctx = Rc::new(AuthContext::new(
            SupabaseBackend::new(config, LocalStorageStore),
            AuthorizationCache::new(LocalStorageStore),
            SignalSink(auth),
            ToastNotifier(toasts),
        ));
        provide_context(AuthActions(StoredValue::new_local(ctx.clone())));

        let (task, handle) = futures::future::abortable(async move { ctx.run().await });
        leptos::task::spawn_local(async move {
            let _ = task.await;
        });
        on_cleanup(move || handle.abort());
    }
}
