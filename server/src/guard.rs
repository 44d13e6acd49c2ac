//! Edge redirect guard for protected paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before any route: requests for protected prefixes without a session
//! cookie are bounced to the login page, carrying the original path as a
//! `redirect` query parameter for post-login deep-linking.
//!
//! The check is presence-only. It does not validate the cookie's
//! authenticity or expiry — a forged or expired cookie of the right name
//! passes here and fails at the backend on the first authenticated API
//! call. That is intentional: this layer is coarse UX routing, and the
//! backend stays the security boundary.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

/// Name of the opaque session cookie set by the backend on login.
pub const SESSION_COOKIE: &str = "session_token";

/// Path prefixes that require a session cookie before rendering.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/profile"];

/// Where to redirect a request, if anywhere. `None` passes the request
/// through unmodified.
pub(crate) fn redirect_target(path_and_query: &str, has_session_cookie: bool) -> Option<String> {
    if has_session_cookie {
        return None;
    }
    let protected = PROTECTED_PREFIXES.iter().any(|prefix| path_and_query.starts_with(prefix));
    protected.then(|| {
        let encoded: String = url::form_urlencoded::byte_serialize(path_and_query.as_bytes()).collect();
        format!("/login?redirect={encoded}")
    })
}

/// Axum middleware applying [`redirect_target`] to every inbound request.
pub async fn edge_redirect(jar: CookieJar, request: Request, next: Next) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let has_cookie = jar.get(SESSION_COOKIE).is_some();

    match redirect_target(&path_and_query, has_cookie) {
        Some(target) => {
            tracing::debug!(path = %path_and_query, "unauthenticated request to protected path");
            Redirect::temporary(&target).into_response()
        }
        None => next.run(request).await,
    }
}
