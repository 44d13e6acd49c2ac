//! Transparent `/api/*` proxy to the booking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks same-origin; this catch-all forwards any `/api` request
//! to `BACKEND_API_URL` with the cookie header passed through verbatim, and
//! relays `Set-Cookie` back so login/logout work without the client ever
//! seeing the backend origin. The gateway adds no API surface of its own —
//! new backend endpoints are reachable without touching this code.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Upper bound on forwarded request bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Request headers forwarded to the backend. Hop-by-hop and host headers are
/// deliberately absent.
const FORWARDED_REQUEST_HEADERS: &[header::HeaderName] =
    &[header::COOKIE, header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION];

/// Response headers relayed back to the browser.
const RELAYED_RESPONSE_HEADERS: &[header::HeaderName] =
    &[header::CONTENT_TYPE, header::SET_COOKIE, header::CACHE_CONTROL];

/// Shared state for the proxy handler.
#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_api_url: String,
}

impl ProxyState {
    #[must_use]
    pub fn new(backend_api_url: String) -> Self {
        Self { http: reqwest::Client::new(), backend_api_url }
    }
}

/// Full upstream URL for an inbound request path + query.
pub(crate) fn target_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Catch-all handler forwarding the request to the backend.
pub async fn proxy_api(State(state): State<ProxyState>, request: Request) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let url = target_url(&state.backend_api_url, &path_and_query);
    let method = request.method().clone();

    let mut forwarded = HeaderMap::new();
    for name in FORWARDED_REQUEST_HEADERS {
        for value in request.headers().get_all(name) {
            forwarded.append(name.clone(), value.clone());
        }
    }

    let body = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!(%error, "refusing oversized or unreadable proxy body");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let upstream = state
        .http
        .request(method, &url)
        .headers(forwarded)
        .body(body.to_vec())
        .send()
        .await;

    match upstream {
        Ok(response) => {
            let status = response.status();
            let mut relayed = HeaderMap::new();
            for name in RELAYED_RESPONSE_HEADERS {
                for value in response.headers().get_all(name) {
                    relayed.append(name.clone(), value.clone());
                }
            }
            match response.bytes().await {
                Ok(bytes) => (status, relayed, bytes).into_response(),
                Err(error) => bad_gateway(&error),
            }
        }
        Err(error) => bad_gateway(&error),
    }
}

/// 502 in the backend's own envelope shape so client-side normalization
/// treats gateway failures like any other backend failure.
fn bad_gateway(error: &dyn std::fmt::Display) -> Response {
    tracing::error!(%error, "backend request failed");
    (
        StatusCode::BAD_GATEWAY,
        axum::Json(serde_json::json!({
            "success": false,
            "statusCode": 502,
            "message": "backend unavailable",
        })),
    )
        .into_response()
}
