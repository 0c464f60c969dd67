//! Login page for email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in only establishes a session. Whether the operator may use the admin
//! tool is decided afterwards by the auth context; this page leaves once the
//! guard would grant access, and stays (with the toast explaining why) when
//! the permission check denies it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::Authorization;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_granted_redirect;

pub const MISSING_CREDENTIALS: &str = "Enter your email and password.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const ACCESS_DENIED: &str = "This account does not have access to CF Admin.";

/// Trim the email and require both fields. Passwords are kept verbatim.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message for a signed-in user whose access has been refused.
pub fn access_notice(state: &AuthState) -> Option<&'static str> {
    let refused = !state.loading && state.user.is_some() && state.authorization == Authorization::Unauthorized;
    refused.then_some(ACCESS_DENIED)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let actions = use_context::<crate::state::auth::AuthActions>();

    install_granted_redirect(auth, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let Some(actions) = actions else {
                log::error!("auth actions missing from context");
                return;
            };
            busy.set(true);
            actions.sign_in(email_value, password_value, move |e| {
                info.set(e.user_message());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    // A resolved state after a submit (granted or denied) ends the busy phase.
    Effect::new(move || {
        let (loading, notice) = auth.with(|s| (s.loading, access_notice(s)));
        if !loading {
            busy.set(false);
        }
        if let Some(msg) = notice {
            info.set(msg.to_owned());
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CF Admin"</h1>
                <p class="login-card__subtitle">"Sign in with your operator account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@connectingfood.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
