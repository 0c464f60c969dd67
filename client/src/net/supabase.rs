//! HTTP backend for the managed auth provider and the authorization RPC.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ProviderError::NotConfigured`, since a
//! browser session only exists in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the gate's `SessionProvider` and `AuthorizationCheck`. The
//! session is persisted in `localStorage` and every change is broadcast as a
//! session-change event, so the auth context has one code path for sign-in,
//! sign-out, refresh and metadata updates.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are decoded into `ProviderError::Response` with the
//! provider's own message. Local session state is dropped before a remote
//! sign-out is attempted, so sign-out succeeds locally even offline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use gate::{
    AuthorizationCheck, KeyValueStore, ProviderError, Session, SessionBroadcaster, SessionProvider, SignOutScope,
    Subscription, User,
};
#[cfg(feature = "hydrate")]
use gate::AuthEvent;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::util::storage::{load_json, save_json};

/// Storage key of the persisted session.
pub const SESSION_STORAGE_KEY: &str = "cf_admin.session";

/// Name of the remote "is this user a CF operator" procedure.
pub const IS_CF_USER_RPC: &str = "is_cf_user";

/// Seconds before expiry at which a persisted session is refreshed.
pub const REFRESH_MARGIN_SECS: i64 = 30;

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base: &str, grant_type: &str) -> String {
    format!("{base}/auth/v1/token?grant_type={grant_type}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str, scope: SignOutScope) -> String {
    format!("{base}/auth/v1/logout?scope={}", scope.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_endpoint(base: &str, name: &str) -> String {
    format!("{base}/rest/v1/rpc/{name}")
}

/// Decode a provider error body into a [`ProviderError`].
///
/// The auth service and the data API use different shapes, so the first
/// non-empty of `error_description`, `msg`, `message`, `error` wins.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> ProviderError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|field| json.get(field).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_owned))
        })
        .unwrap_or_else(|| body.trim().to_owned());
    ProviderError::Response { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(flatten)]
    session: Session,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Parse a token-endpoint body, deriving `expires_at` from `expires_in` when
/// the provider omits it.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_token_body(body: &str, now_secs: i64) -> Result<Session, ProviderError> {
    let TokenResponse { mut session, expires_in } =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    if session.expires_at.is_none() {
        session.expires_at = expires_in.map(|secs| now_secs + secs);
    }
    Ok(session)
}

/// Only a JSON `true` grants; `false`, `null` or any other shape denies.
#[cfg(any(test, feature = "hydrate"))]
fn is_cf_from_body(body: &str) -> Result<bool, ProviderError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(matches!(value, Value::Bool(true)))
}

/// Whether `session` should be refreshed before use at `now_secs`.
#[cfg(any(test, feature = "hydrate"))]
fn needs_refresh(session: &Session, now_secs: i64) -> bool {
    session.is_expired(now_secs + REFRESH_MARGIN_SECS)
}

#[cfg(feature = "hydrate")]
fn now_secs() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let secs = (js_sys::Date::now() / 1000.0) as i64;
    secs
}

/// Auth provider + RPC client bound to one backend project.
#[derive(Clone)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct SupabaseBackend<S> {
    config: Option<ClientConfig>,
    store: S,
    broadcaster: SessionBroadcaster,
}

impl<S: KeyValueStore> SupabaseBackend<S> {
    /// A backend without config answers every call with
    /// [`ProviderError::NotConfigured`].
    pub fn new(config: Option<ClientConfig>, store: S) -> Self {
        Self { config, store, broadcaster: SessionBroadcaster::new() }
    }

    #[cfg(feature = "hydrate")]
    fn config(&self) -> Result<&ClientConfig, ProviderError> {
        self.config.as_ref().ok_or(ProviderError::NotConfigured)
    }

    #[cfg(feature = "hydrate")]
    fn stored_session(&self) -> Option<Session> {
        load_json(&self.store, SESSION_STORAGE_KEY)
    }

    #[cfg(feature = "hydrate")]
    fn store_session(&self, session: &Session) {
        if let Err(e) = save_json(&self.store, SESSION_STORAGE_KEY, session) {
            log::warn!("failed to persist session: {e}");
        }
    }

    #[cfg(feature = "hydrate")]
    fn forget_session(&self) {
        if let Err(e) = self.store.remove(SESSION_STORAGE_KEY) {
            log::warn!("failed to remove persisted session: {e}");
        }
    }

    /// Send a JSON request and return the raw body of a successful response.
    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        request: gloo_net::http::RequestBuilder,
        token: Option<&str>,
        payload: &Value,
    ) -> Result<String, ProviderError> {
        let config = self.config()?;
        let bearer = format!("Bearer {}", token.unwrap_or(config.anon_key.as_str()));
        let resp = request
            .header("apikey", &config.anon_key)
            .header("Authorization", &bearer)
            .json(payload)
            .map_err(|e| ProviderError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ProviderError::Parse(e.to_string()))?;
        if !ok {
            return Err(error_from_body(status, &body));
        }
        Ok(body)
    }

    #[cfg(feature = "hydrate")]
    async fn refresh(&self, refresh_token: &str) -> Result<Session, ProviderError> {
        let url = token_endpoint(&self.config()?.backend_url, "refresh_token");
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let body = self.send(gloo_net::http::Request::post(&url), None, &payload).await?;
        session_from_token_body(&body, now_secs())
    }
}

#[async_trait::async_trait(?Send)]
impl<S: KeyValueStore> SessionProvider for SupabaseBackend<S> {
    async fn current_session(&self) -> Result<Option<Session>, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            self.config()?;
            let Some(session) = self.stored_session() else {
                return Ok(None);
            };
            if !needs_refresh(&session, now_secs()) {
                return Ok(Some(session));
            }
            let Some(refresh_token) = session.refresh_token.as_deref() else {
                self.forget_session();
                return Ok(None);
            };
            match self.refresh(refresh_token).await {
                Ok(fresh) => {
                    self.store_session(&fresh);
                    self.broadcaster.emit(AuthEvent::TokenRefreshed, Some(fresh.clone()));
                    Ok(Some(fresh))
                }
                Err(e) => {
                    self.forget_session();
                    Err(e)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ProviderError::NotConfigured)
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let url = token_endpoint(&self.config()?.backend_url, "password");
            let payload = serde_json::json!({ "email": email, "password": password });
            let body = self.send(gloo_net::http::Request::post(&url), None, &payload).await?;
            let session = session_from_token_body(&body, now_secs())?;
            self.store_session(&session);
            self.broadcaster.emit(AuthEvent::SignedIn, Some(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ProviderError::NotConfigured)
        }
    }

    async fn sign_out(&self, scope: SignOutScope) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let previous = self.stored_session();
            self.forget_session();
            self.broadcaster.emit(AuthEvent::SignedOut, None);
            let Some(previous) = previous else {
                return Ok(());
            };
            let url = logout_endpoint(&self.config()?.backend_url, scope);
            self.send(gloo_net::http::Request::post(&url), Some(&previous.access_token), &Value::Null)
                .await
                .map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scope;
            Err(ProviderError::NotConfigured)
        }
    }

    async fn update_user_metadata(&self, patch: Map<String, Value>) -> Result<User, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let mut session = self.stored_session().ok_or(ProviderError::NoSession)?;
            let url = user_endpoint(&self.config()?.backend_url);
            let payload = serde_json::json!({ "data": patch });
            let body = self
                .send(gloo_net::http::Request::put(&url), Some(&session.access_token), &payload)
                .await?;
            let user: User = serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;
            session.user = user.clone();
            self.store_session(&session);
            self.broadcaster.emit(AuthEvent::UserUpdated, Some(session));
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = patch;
            Err(ProviderError::NotConfigured)
        }
    }

    fn subscribe(&self) -> Subscription {
        self.broadcaster.subscribe()
    }
}

#[async_trait::async_trait(?Send)]
impl<S: KeyValueStore> AuthorizationCheck for SupabaseBackend<S> {
    async fn is_cf_user(&self, session: &Session) -> Result<bool, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let url = rpc_endpoint(&self.config()?.backend_url, IS_CF_USER_RPC);
            let payload = Value::Object(Map::new());
            let body = self
                .send(gloo_net::http::Request::post(&url), Some(&session.access_token), &payload)
                .await?;
            is_cf_from_body(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(ProviderError::NotConfigured)
        }
    }
}
