//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/api` proxy, the Leptos SSR app, and static assets under a
//! single Axum router, with the edge redirect guard layered in front of
//! everything. SSR requests get the full inbound request (cookies included)
//! via `leptos_axum`, which is how the client crate's data loader forwards
//! the session to the backend during render.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::guard;
use crate::proxy::{self, ProxyState};

/// Build the application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (malformed
/// `[package.metadata.leptos]` section).
pub fn app(config: &Config) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    // Leptos SSR routes rendering the client application.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Same-origin API surface, proxied to the backend.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let api_router = Router::new()
        .route("/api/{*path}", any(proxy::proxy_api))
        .layer(cors)
        .with_state(ProxyState::new(config.backend_api_url.clone()));

    // Leptos static assets (WASM, CSS, JS) from the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_router
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(guard::edge_redirect))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
