//! Public backend configuration carried from the host into the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the backend URL and anon key into `<meta>` tags in the
//! HTML shell; the hydrated client reads them back here. Both values are
//! public; row-level security on the backend guards the data.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the backend base URL.
pub const BACKEND_URL_META: &str = "cf-backend-url";
/// `<meta name=...>` carrying the backend anon key.
pub const BACKEND_KEY_META: &str = "cf-backend-key";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing `/`.
    pub backend_url: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: String,
}

impl ClientConfig {
    /// Build from raw values; `None` if either is missing or blank.
    #[must_use]
    pub fn from_parts(url: Option<&str>, key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|v| !v.is_empty())?;
        let key = key.map(str::trim).filter(|v| !v.is_empty())?;
        Some(Self { backend_url: url.trim_end_matches('/').to_owned(), anon_key: key.to_owned() })
    }

    /// Read the config from the current document's `<meta>` tags.
    /// Always `None` outside the browser.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()?.document()?;
            let read = |name: &str| {
                document
                    .query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("content"))
            };
            Self::from_parts(read(BACKEND_URL_META).as_deref(), read(BACKEND_KEY_META).as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
