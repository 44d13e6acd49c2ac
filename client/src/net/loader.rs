//! Server-side data loading with per-request memoization.
//!
//! SYSTEM CONTEXT
//! ==============
//! During SSR the browser's cookie jar is not available, so page data is
//! fetched by forwarding the inbound request's `Cookie` header verbatim to
//! the backend. One `DataLoader` is built per inbound request and provided
//! through Leptos context; several components asking for the same resource
//! within one render pass share a single backend call via the cache.
//!
//! ERROR HANDLING
//! ==============
//! Loaders never fail the render: any transport error, non-2xx status, or
//! malformed envelope degrades to `None`, which typed wrappers turn into an
//! empty collection.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Request-scoped memo of resolved payloads, keyed by backend path.
///
/// Stores the raw `data` value of a successful envelope; a second load of the
/// same path decodes from here instead of issuing another backend call.
#[derive(Clone, Debug, Default)]
pub struct LoaderCache {
    inner: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl LoaderCache {
    /// Cached payload for `path`, if a load already resolved this request.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<serde_json::Value> {
        self.inner.lock().ok()?.get(path).cloned()
    }

    /// Record the resolved payload for `path`.
    pub fn insert(&self, path: &str, data: serde_json::Value) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(path.to_owned(), data);
        }
    }
}

/// Join the backend base URL and an absolute request path.
///
/// Tolerates a trailing slash on the base so operators can set
/// `BACKEND_API_URL` either way.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    debug_assert!(path.starts_with('/'), "loader paths are absolute");
    format!("{base}{path}")
}

#[cfg(feature = "ssr")]
pub use ssr::DataLoader;

#[cfg(feature = "ssr")]
mod ssr {
    use serde::de::DeserializeOwned;

    use super::{LoaderCache, join_url};

    /// One-per-request loader that forwards the inbound cookie header to the
    /// backend and memoizes resolved payloads for the request's lifetime.
    #[derive(Clone)]
    pub struct DataLoader {
        http: reqwest::Client,
        base_url: String,
        cookie_header: Option<String>,
        cache: LoaderCache,
    }

    impl DataLoader {
        /// Build a loader for one inbound request. `cookie_header` is the
        /// request's serialized `Cookie` header, forwarded verbatim; the
        /// loader never parses or validates its contents.
        #[must_use]
        pub fn new(base_url: String, cookie_header: Option<String>) -> Self {
            Self {
                http: reqwest::Client::new(),
                base_url,
                cookie_header,
                cache: LoaderCache::default(),
            }
        }

        /// Build a loader from the SSR request parts provided by
        /// `leptos_axum`, reading the backend base URL from the environment.
        #[must_use]
        pub fn from_parts(parts: &http::request::Parts) -> Self {
            let cookie_header = parts
                .headers
                .get(http::header::COOKIE)
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned);
            let base_url = std::env::var("BACKEND_API_URL").unwrap_or_default();
            Self::new(base_url, cookie_header)
        }

        /// Fetch `path` from the backend and return the envelope's `data`.
        ///
        /// Memoized per request: a repeated path returns the cached payload
        /// without a second backend call. Every failure mode returns `None`.
        pub async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
            if let Some(cached) = self.cache.get(path) {
                return serde_json::from_value(cached).ok();
            }

            let url = join_url(&self.base_url, path);
            let mut request = self.http.get(&url);
            if let Some(cookie) = &self.cookie_header {
                request = request.header(http::header::COOKIE, cookie);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(error) => {
                    leptos::logging::warn!("loader: {path}: {error}");
                    return None;
                }
            };
            if !response.status().is_success() {
                return None;
            }

            let envelope: crate::net::types::Envelope<serde_json::Value> = response.json().await.ok()?;
            let data = envelope.into_data()?;
            self.cache.insert(path, data.clone());
            serde_json::from_value(data).ok()
        }

        /// Fetch a collection, degrading to empty on any failure.
        pub async fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
            self.fetch_data(path).await.unwrap_or_default()
        }
    }
}
