//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    protected_route::ProtectedRoute,
    toast::{ToastState, Toasts},
};
use crate::config::{BACKEND_KEY_META, BACKEND_URL_META, ClientConfig};
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is rendered into `<meta>` tags for the hydrated client; when it
/// is absent the tags are omitted and every session resolves as denied.
pub fn shell(options: LeptosOptions, config: Option<ClientConfig>) -> impl IntoView {
    let (url, key) = config.map(|c| (c.backend_url, c.anon_key)).unzip();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {url.map(|content| view! { <meta name=BACKEND_URL_META content=content/> })}
                {key.map(|content| view! { <meta name=BACKEND_KEY_META content=content/> })}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast signals, starts the auth context in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    crate::state::auth::start(auth, toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/cf-admin.css"/>
        <Title text="CF Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
        <Toasts/>
    }
}
