//! Protected landing page shown to authorized operators.

use leptos::prelude::*;

use crate::state::auth::{AuthState, display_email};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = move || auth.with(display_email).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    let actions = use_context::<crate::state::auth::AuthActions>();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(actions) = actions {
            actions.sign_out();
        }
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"CF Admin"</h1>
                <span class="home-header__user">{email}</span>
                <button class="home-header__sign-out" type="button" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </header>
            <main class="home-main">
                <p>"You are signed in with administrator access."</p>
            </main>
        </div>
    }
}
