use super::*;

use axum::Router;
use axum::body::Body;
use axum::http::{Request as HttpRequest, StatusCode, header};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

// =============================================================================
// redirect_target — pure decision
// =============================================================================

#[test]
fn protected_path_without_cookie_redirects() {
    assert_eq!(
        redirect_target("/dashboard/tourist/my-trips", false),
        Some("/login?redirect=%2Fdashboard%2Ftourist%2Fmy-trips".to_owned())
    );
    assert_eq!(
        redirect_target("/profile", false),
        Some("/login?redirect=%2Fprofile".to_owned())
    );
}

#[test]
fn query_string_is_carried_in_the_deep_link() {
    assert_eq!(
        redirect_target("/dashboard/guide/bookings?status=PENDING", false),
        Some("/login?redirect=%2Fdashboard%2Fguide%2Fbookings%3Fstatus%3DPENDING".to_owned())
    );
}

#[test]
fn any_cookie_presence_passes_through() {
    // Presence-only by contract: validity is the backend's problem.
    assert_eq!(redirect_target("/dashboard/admin/users", true), None);
    assert_eq!(redirect_target("/profile", true), None);
}

#[test]
fn unprotected_paths_always_pass() {
    assert_eq!(redirect_target("/", false), None);
    assert_eq!(redirect_target("/listing/l1", false), None);
    assert_eq!(redirect_target("/login", false), None);
    assert_eq!(redirect_target("/api/listing", false), None);
}

// =============================================================================
// edge_redirect — end-to-end through an axum router
// =============================================================================

async fn page() -> &'static str {
    "page"
}

fn test_app() -> Router {
    Router::new()
        .route("/", get(page))
        .route("/dashboard/tourist/my-trips", get(page))
        .route("/profile", get(page))
        .layer(middleware::from_fn(edge_redirect))
}

#[tokio::test]
async fn unauthenticated_protected_request_gets_redirect() {
    let response = test_app()
        .oneshot(
            HttpRequest::builder()
                .uri("/dashboard/tourist/my-trips")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/login?redirect=%2Fdashboard%2Ftourist%2Fmy-trips")
    );
}

#[tokio::test]
async fn cookie_bearing_request_passes_through_regardless_of_validity() {
    let response = test_app()
        .oneshot(
            HttpRequest::builder()
                .uri("/dashboard/tourist/my-trips")
                .header(header::COOKIE, format!("{SESSION_COOKIE}=clearly-forged"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unrelated_cookie_does_not_count() {
    let response = test_app()
        .oneshot(
            HttpRequest::builder()
                .uri("/profile")
                .header(header::COOKIE, "theme=dark")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn public_route_is_untouched() {
    let response = test_app()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}
