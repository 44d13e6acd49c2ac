//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The role guard, login page, and navbar all agree through these helpers on
//! where each role lands and how deep-link redirects are carried across the
//! login flow.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, encode_query_value};

/// Default landing page for a resolved role. Unknown roles fall back to the
/// public home page rather than guessing at a dashboard.
#[must_use]
pub fn default_landing(role: Role) -> &'static str {
    match role {
        Role::Tourist => "/dashboard/tourist/wishlist",
        Role::Guide => "/dashboard/guide/my-listings",
        Role::Admin => "/dashboard/admin/users",
        Role::Unknown => "/",
    }
}

/// Login URL carrying the interrupted path for post-login deep-linking.
#[must_use]
pub fn login_redirect(current_path: &str) -> String {
    format!("/login?redirect={}", encode_query_value(current_path))
}

/// Accept a `redirect` query value only when it is a same-site absolute path.
/// Anything else (external URLs, scheme-relative `//host`, empty) is dropped
/// so the login flow cannot be used as an open redirect.
#[must_use]
pub fn sanitize_redirect(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.starts_with('/') && !raw.starts_with("//") {
        Some(raw.to_owned())
    } else {
        None
    }
}

/// Where to navigate after a successful login: the sanitized deep-link when
/// one was carried, otherwise the role's default landing page.
#[must_use]
pub fn post_login_destination(redirect: Option<&str>, role: Role) -> String {
    sanitize_redirect(redirect).unwrap_or_else(|| default_landing(role).to_owned())
}
