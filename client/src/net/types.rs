//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! Every backend endpoint wraps its payload in the same `{success, statusCode,
//! message, data}` envelope; these types mirror that shape so serde does the
//! normalization and callers only see typed payloads. Enum fields carry an
//! `Unknown` catch-all so a newer backend cannot break deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Tourist,
    Guide,
    Admin,
    /// Any role string this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire spelling, for query strings and display fallbacks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tourist => "TOURIST",
            Self::Guide => "GUIDE",
            Self::Admin => "ADMIN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// The authenticated user as returned by `GET /api/user/me`.
///
/// Held only in memory for the current page tree; the backend is the source
/// of truth and the probe re-fetches it on every mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account role; drives dashboard routing and role guards.
    pub role: Role,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Free-form profile text.
    #[serde(default)]
    pub bio: Option<String>,
    /// Languages spoken (guides) or preferred (tourists).
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    /// Tour expertise areas; only meaningful for guides.
    #[serde(default)]
    pub expertise: Option<Vec<String>>,
    /// Travel interests; only meaningful for tourists.
    #[serde(default)]
    pub travel_preferences: Option<Vec<String>>,
    /// Guide day rate in USD; `None` for tourists and admins.
    #[serde(default)]
    pub daily_rate: Option<f64>,
}

/// The response envelope every auth-related endpoint must satisfy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "none_data")]
    pub data: Option<T>,
}

fn none_data<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    /// Payload of a successful envelope; `None` when `success` is false or
    /// the backend omitted `data`.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Payload of `POST /api/auth/login`. The user is optional because older
/// backend versions returned only the token here; callers reconcile with a
/// follow-up probe either way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub access_token: Option<String>,
}

// =============================================================================
// LISTINGS
// =============================================================================

/// Moderation/visibility state of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl ListingStatus {
    /// Wire spelling, for query strings and badges.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Guide info embedded in a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// A full tour listing as returned by `GET /api/listing/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub destination: String,
    #[serde(default)]
    pub description: String,
    pub daily_rate: f64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub guide: Option<GuideSummary>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Compact listing used by browse results and wishlist rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub daily_rate: f64,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub guide_name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// One page of browse results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), page: 0, total_pages: 0, total_items: 0 }
    }
}

/// Browse filters + pagination, serialized into the listing search query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingQuery {
    pub destination: String,
    pub language: Option<String>,
    pub expertise: Option<String>,
    pub max_rate: Option<f64>,
    pub page: u32,
}

impl ListingQuery {
    /// Render as a `?key=value` query string. Empty filters are omitted;
    /// an empty query yields an empty string so callers can append blindly.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        let destination = self.destination.trim();
        if !destination.is_empty() {
            pairs.push(format!("destination={}", encode_query_value(destination)));
        }
        if let Some(language) = self.language.as_deref() {
            pairs.push(format!("language={}", encode_query_value(language)));
        }
        if let Some(expertise) = self.expertise.as_deref() {
            pairs.push(format!("expertise={}", encode_query_value(expertise)));
        }
        if let Some(max_rate) = self.max_rate {
            pairs.push(format!("maxRate={max_rate}"));
        }
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Fields a guide supplies when creating or editing a listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub title: String,
    pub destination: String,
    pub description: String,
    pub daily_rate: f64,
    pub languages: Vec<String>,
    pub expertise: Vec<String>,
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Lifecycle state of a booking; transitions are enforced by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Wire spelling, for query strings and badges.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Declined => "DECLINED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A booking as seen by tourists, guides, and admins alike. Tourist-facing
/// rows carry the guide name and vice versa; absent fields default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub listing_id: String,
    #[serde(default)]
    pub listing_title: String,
    #[serde(default)]
    pub tourist_name: Option<String>,
    #[serde(default)]
    pub guide_name: Option<String>,
    /// Tour date as an ISO `YYYY-MM-DD` string.
    pub date: String,
    #[serde(default)]
    pub party_size: u32,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub total_price: f64,
}

/// A tourist's booking request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub listing_id: String,
    pub date: String,
    pub party_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// =============================================================================
// WISHLIST / ADMIN
// =============================================================================

/// A saved listing on the tourist's wishlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub listing: ListingSummary,
}

/// A user row in the admin moderation table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub banned: bool,
}

/// Percent-encode a string for use as a single query-parameter value.
///
/// Unreserved characters pass through; everything else (including `/`, `?`,
/// `&` and `=`) is `%XX`-escaped so redirect paths survive a round trip.
#[must_use]
pub fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit(u32::from(byte & 0x0f), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }
    out
}
