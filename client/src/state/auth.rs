//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthState` signal is provided via context per page tree. The root
//! component runs the session probe once on mount; route guards and
//! user-aware components read the holder and never talk to the network
//! themselves.
//!
//! ERROR HANDLING
//! ==============
//! Probe and login failures of every kind (transport, non-2xx, bad body)
//! collapse to the unauthenticated outcome; nothing at this boundary throws.
//! "Can't prove who you are" and "proved you're nobody" are treated the same.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::SessionUser;

/// Authentication state tracking the current user and probe status.
///
/// `loading` starts true so role-gated pages render nothing until the first
/// probe resolves; no code path may report authenticated without a resolved
/// user object.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// True iff the most recent probe resolved a user.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Record a probe outcome and mark the first resolution done.
    pub(crate) fn resolve(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }
}

/// Session probe: ask the backend who the cookie belongs to and reconcile
/// holder state with the answer. Safe to call repeatedly; never errors.
pub async fn check_auth(auth: RwSignal<AuthState>) -> Option<SessionUser> {
    let user = api::fetch_current_user().await;
    auth.update(|state| state.resolve(user.clone()));
    user
}

/// Log in with email/password credentials.
///
/// On HTTP success the holder is set optimistically from the login response
/// when it carries a user, then unconditionally reconciled with a fresh
/// probe, so the resolved state reflects the server's view rather than the
/// login body's. Returns whether the reconciled session is authenticated.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> bool {
    match api::login(email, password).await {
        Ok(optimistic) => {
            if let Some(user) = optimistic {
                auth.update(|state| state.resolve(Some(user)));
            }
            check_auth(auth).await.is_some()
        }
        Err(error) => {
            leptos::logging::warn!("login failed: {error}");
            false
        }
    }
}

/// Log out: best-effort backend call, then a hard reset of client state via
/// full navigation to the home path. The app holds no other durable client
/// store, so a full reload is the reconciliation.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(error) = api::logout().await {
        leptos::logging::warn!("logout request failed: {error}");
    }
    auth.update(|state| state.resolve(None));

    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}
