//! Colored status badges for bookings and listings.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::{BookingStatus, ListingStatus};

pub(crate) fn booking_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge badge--pending",
        BookingStatus::Confirmed => "badge badge--confirmed",
        BookingStatus::Declined => "badge badge--declined",
        BookingStatus::Cancelled => "badge badge--cancelled",
        BookingStatus::Completed => "badge badge--completed",
        BookingStatus::Unknown => "badge",
    }
}

pub(crate) fn listing_badge_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "badge badge--confirmed",
        ListingStatus::Inactive => "badge badge--cancelled",
        ListingStatus::Suspended => "badge badge--declined",
        ListingStatus::Unknown => "badge",
    }
}

#[component]
pub fn BookingBadge(status: BookingStatus) -> impl IntoView {
    view! { <span class=booking_badge_class(status)>{status.as_str()}</span> }
}

#[component]
pub fn ListingBadge(status: ListingStatus) -> impl IntoView {
    view! { <span class=listing_badge_class(status)>{status.as_str()}</span> }
}
