//! REST service wrappers for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with browser-managed
//! credentials, so the session cookie rides along automatically.
//! Server-side (ssr): public page data resolves through the request-scoped
//! [`DataLoader`](crate::net::loader::DataLoader); everything session-mutating
//! is a stub since it is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Public-page reads degrade (`Option`/empty collections) so SSR renders an
//! empty state instead of crashing; dashboard reads and mutations return the
//! tagged [`ApiError`] so calling UI can surface a retry panel or a specific
//! toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AdminUser, Booking, BookingInput, BookingStatus, Listing, ListingInput, ListingQuery, ListingStatus,
    ListingSummary, Page, Role, SessionUser, WishlistItem,
};
#[cfg(feature = "hydrate")]
use super::types::{Envelope, LoginData};

pub const ME_ENDPOINT: &str = "/api/user/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
const MY_BOOKINGS_ENDPOINT: &str = "/api/booking/my";
const GUIDE_BOOKINGS_ENDPOINT: &str = "/api/booking/requests";
const MY_LISTINGS_ENDPOINT: &str = "/api/listing/mine";
const WISHLIST_ENDPOINT: &str = "/api/wishlist";
const USERS_ENDPOINT: &str = "/api/user";
const META_LANGUAGES_ENDPOINT: &str = "/api/meta/languages";
const META_EXPERTISE_ENDPOINT: &str = "/api/meta/expertise";

// =============================================================================
// ENDPOINT BUILDERS
// =============================================================================

fn listing_search_endpoint(query: &ListingQuery) -> String {
    format!("/api/listing{}", query.to_query_string())
}

fn listing_endpoint(id: &str) -> String {
    format!("/api/listing/{id}")
}

fn listing_status_endpoint(id: &str) -> String {
    format!("/api/listing/{id}/status")
}

fn all_listings_endpoint(status: Option<ListingStatus>) -> String {
    match status {
        Some(status) => format!("/api/listing/all?status={}", status.as_str()),
        None => "/api/listing/all".to_owned(),
    }
}

fn booking_endpoint(id: &str) -> String {
    format!("/api/booking/{id}")
}

fn booking_status_endpoint(id: &str) -> String {
    format!("/api/booking/{id}/status")
}

fn all_bookings_endpoint(status: Option<BookingStatus>) -> String {
    match status {
        Some(status) => format!("/api/booking/all?status={}", status.as_str()),
        None => "/api/booking/all".to_owned(),
    }
}

fn users_endpoint(role: Option<Role>) -> String {
    match role {
        Some(role) => format!("{USERS_ENDPOINT}?role={}", role.as_str()),
        None => USERS_ENDPOINT.to_owned(),
    }
}

fn user_ban_endpoint(id: &str) -> String {
    format!("/api/user/{id}/ban")
}

fn user_endpoint(id: &str) -> String {
    format!("/api/user/{id}")
}

fn wishlist_item_endpoint(id: &str) -> String {
    format!("/api/wishlist/{id}")
}

/// Status to report when the transport succeeded but the envelope carries
/// `success:false`. Prefers the envelope's own `statusCode`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn envelope_error_status(status_code: u16) -> u16 {
    if status_code >= 100 { status_code } else { 400 }
}

// =============================================================================
// TRANSPORT (hydrate)
// =============================================================================

#[cfg(feature = "hydrate")]
async fn request_envelope<T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: Option<&serde_json::Value>,
) -> Result<Envelope<T>, ApiError> {
    let builder = builder.credentials(web_sys::RequestCredentials::Include);
    let response = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?,
    };
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ApiError::Http(envelope_error_status(envelope.status_code)))
    }
}

#[cfg(feature = "hydrate")]
async fn get_data<T: serde::de::DeserializeOwned>(path: &str) -> Result<Option<T>, ApiError> {
    let envelope = request_envelope::<T>(gloo_net::http::Request::get(path), None).await?;
    Ok(envelope.into_data())
}

#[cfg(feature = "hydrate")]
async fn mutate<T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let envelope = request_envelope::<T>(builder, body).await?;
    envelope
        .into_data()
        .ok_or_else(|| ApiError::Decode("missing data in successful envelope".to_owned()))
}

// =============================================================================
// SESSION
// =============================================================================

/// Session probe: fetch the currently authenticated user from the backend.
/// Returns `None` if not authenticated, on any failure, or on the server —
/// "can't prove who you are" and "proved you're nobody" are the same here.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        get_data::<SessionUser>(ME_ENDPOINT).await.ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `POST /api/auth/login`. On success returns the envelope's user when one
/// was included, so the caller can set state optimistically before the
/// reconciling probe.
///
/// # Errors
///
/// Tagged [`ApiError`] on transport failure, rejection, or a bad body.
pub async fn login(email: &str, password: &str) -> Result<Option<SessionUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let data: Option<LoginData> =
            request_envelope(gloo_net::http::Request::post(LOGIN_ENDPOINT), Some(&payload))
                .await?
                .into_data();
        Ok(data.and_then(|d| d.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /api/auth/register` with a tourist or guide account type.
///
/// # Errors
///
/// Tagged [`ApiError`]; the backend's message (duplicate email, weak
/// password) arrives as an HTTP-level rejection.
pub async fn register(name: &str, email: &str, password: &str, role: Role) -> Result<Option<SessionUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
        });
        let data: Option<LoginData> =
            request_envelope(gloo_net::http::Request::post(REGISTER_ENDPOINT), Some(&payload))
                .await?
                .into_data();
        Ok(data.and_then(|d| d.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password, role);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Best-effort `POST /api/auth/logout`; the response body is ignored.
///
/// # Errors
///
/// Returns the transport error so the caller can log it; callers still clear
/// local state regardless.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

/// `PATCH /api/user/me` with edited profile fields.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure; the updated user is returned on success.
pub async fn update_profile(fields: &serde_json::Value) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        mutate(gloo_net::http::Request::patch(ME_ENDPOINT), Some(fields)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================================
// LISTINGS
// =============================================================================

/// Search public listings. Degrades to an empty page on any failure.
pub async fn fetch_listings(query: &ListingQuery) -> Page<ListingSummary> {
    let path = listing_search_endpoint(query);
    #[cfg(feature = "hydrate")]
    {
        get_data::<Page<ListingSummary>>(&path).await.ok().flatten().unwrap_or_default()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        match leptos::prelude::use_context::<crate::net::loader::DataLoader>() {
            Some(loader) => loader.fetch_data(&path).await.unwrap_or_default(),
            None => Page::default(),
        }
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        let _ = path;
        Page::default()
    }
}

/// Fetch one listing by id; `None` when missing or on any failure.
pub async fn fetch_listing(id: &str) -> Option<Listing> {
    let path = listing_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        get_data::<Listing>(&path).await.ok().flatten()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let loader = leptos::prelude::use_context::<crate::net::loader::DataLoader>()?;
        loader.fetch_data(&path).await
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        let _ = path;
        None
    }
}

/// The signed-in guide's own listings (any status). Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_my_listings() -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<Listing>>(MY_LISTINGS_ENDPOINT).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Create a listing.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn create_listing(input: &ListingInput) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(input).map_err(|e| ApiError::Decode(e.to_string()))?;
        mutate(gloo_net::http::Request::post("/api/listing"), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a listing's editable fields.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn update_listing(id: &str, input: &ListingInput) -> Result<Listing, ApiError> {
    let path = listing_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(input).map_err(|e| ApiError::Decode(e.to_string()))?;
        mutate(gloo_net::http::Request::patch(&path), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, input);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a listing.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn delete_listing(id: &str) -> Result<(), ApiError> {
    let path = listing_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        request_envelope::<serde_json::Value>(gloo_net::http::Request::delete(&path), None)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Set a listing's status (owner activate/deactivate, admin moderation).
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn set_listing_status(id: &str, status: ListingStatus) -> Result<Listing, ApiError> {
    let path = listing_status_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        mutate(gloo_net::http::Request::patch(&path), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, status);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Admin view of all listings, optionally filtered by status. Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_all_listings(status: Option<ListingStatus>) -> Result<Vec<Listing>, ApiError> {
    let path = all_listings_endpoint(status);
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<Listing>>(&path).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Ok(Vec::new())
    }
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Submit a booking request for a listing.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure (e.g. date no longer available).
pub async fn create_booking(input: &BookingInput) -> Result<Booking, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(input).map_err(|e| ApiError::Decode(e.to_string()))?;
        mutate(gloo_net::http::Request::post("/api/booking"), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// The signed-in tourist's bookings. Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_my_bookings() -> Result<Vec<Booking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<Booking>>(MY_BOOKINGS_ENDPOINT).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Cancel one of the tourist's own bookings.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn cancel_booking(id: &str) -> Result<Booking, ApiError> {
    let path = booking_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        request_envelope::<Booking>(gloo_net::http::Request::delete(&path), None)
            .await?
            .into_data()
            .ok_or_else(|| ApiError::Decode("missing data in successful envelope".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Incoming booking requests for the signed-in guide. Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_guide_bookings() -> Result<Vec<Booking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<Booking>>(GUIDE_BOOKINGS_ENDPOINT).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Confirm or decline a booking request (guide), or force a status (admin).
///
/// # Errors
///
/// Tagged [`ApiError`] on failure; callers roll back optimistic updates.
pub async fn update_booking_status(id: &str, status: BookingStatus) -> Result<Booking, ApiError> {
    let path = booking_status_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        mutate(gloo_net::http::Request::patch(&path), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, status);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Admin view of all bookings, optionally filtered by status. Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_all_bookings(status: Option<BookingStatus>) -> Result<Vec<Booking>, ApiError> {
    let path = all_bookings_endpoint(status);
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<Booking>>(&path).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Ok(Vec::new())
    }
}

// =============================================================================
// WISHLIST
// =============================================================================

/// The signed-in tourist's wishlist. Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_wishlist() -> Result<Vec<WishlistItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<WishlistItem>>(WISHLIST_ENDPOINT).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Save a listing to the wishlist.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn add_to_wishlist(listing_id: &str) -> Result<WishlistItem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "listingId": listing_id });
        mutate(gloo_net::http::Request::post(WISHLIST_ENDPOINT), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = listing_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove a wishlist entry.
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn remove_from_wishlist(id: &str) -> Result<(), ApiError> {
    let path = wishlist_item_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        request_envelope::<serde_json::Value>(gloo_net::http::Request::delete(&path), None)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================================
// META / ADMIN
// =============================================================================

/// Known tour languages for the filter dropdowns. Degrades to empty.
pub async fn fetch_meta_languages() -> Vec<String> {
    fetch_meta(META_LANGUAGES_ENDPOINT).await
}

/// Known expertise areas for the filter dropdowns. Degrades to empty.
pub async fn fetch_meta_expertise() -> Vec<String> {
    fetch_meta(META_EXPERTISE_ENDPOINT).await
}

async fn fetch_meta(path: &str) -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<String>>(path).await.ok().flatten().unwrap_or_default()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        match leptos::prelude::use_context::<crate::net::loader::DataLoader>() {
            Some(loader) => loader.fetch_collection(path).await,
            None => Vec::new(),
        }
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        let _ = path;
        Vec::new()
    }
}

/// Admin user list, optionally filtered by role. Browser only.
///
/// # Errors
///
/// Tagged [`ApiError`] so the dashboard can show an inline retry panel.
pub async fn fetch_users(role: Option<Role>) -> Result<Vec<AdminUser>, ApiError> {
    let path = users_endpoint(role);
    #[cfg(feature = "hydrate")]
    {
        get_data::<Vec<AdminUser>>(&path).await.map(Option::unwrap_or_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Ok(Vec::new())
    }
}

/// Ban or reinstate a user (admin).
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn set_user_banned(id: &str, banned: bool) -> Result<AdminUser, ApiError> {
    let path = user_ban_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "banned": banned });
        mutate(gloo_net::http::Request::patch(&path), Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, banned);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a user account (admin).
///
/// # Errors
///
/// Tagged [`ApiError`] on failure.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    let path = user_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        request_envelope::<serde_json::Value>(gloo_net::http::Request::delete(&path), None)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
