//! Fetch-boundary error taxonomy.
//!
//! DESIGN
//! ======
//! Transport failures, HTTP error statuses, and malformed envelopes are
//! distinct variants at this boundary; each caller decides how much of that
//! detail to surface. Session probes collapse everything to "unauthenticated",
//! list loaders collapse to an empty collection, and mutations carry the
//! variant up so pages can show a specific message.

use thiserror::Error;

/// Outcome of a single backend call, before call-site policy is applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status (or a `success:false`
    /// envelope carrying that status).
    #[error("request failed with status {0}")]
    Http(u16),
    /// The response body did not match the expected envelope shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short user-facing description for toasts and inline panels.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and retry.".to_owned(),
            Self::Http(401 | 403) => "You are not allowed to do that.".to_owned(),
            Self::Http(status) => format!("The server rejected the request ({status})."),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}
