//! Booking-list state shared by tourist, guide, and admin dashboards.
//!
//! DESIGN
//! ======
//! Status changes are applied optimistically (the row flips before the
//! backend answers) and rolled back from the returned previous value when
//! the mutation fails.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::{Booking, BookingStatus};

/// Whether a tourist may still cancel a booking in this state.
#[must_use]
pub fn can_cancel(status: BookingStatus) -> bool {
    matches!(status, BookingStatus::Pending | BookingStatus::Confirmed)
}

/// Whether a guide still has a decision to make on a request.
#[must_use]
pub fn awaiting_decision(status: BookingStatus) -> bool {
    status == BookingStatus::Pending
}

/// A list of bookings plus load/error state.
#[derive(Clone, Debug, Default)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BookingsState {
    pub fn replace(&mut self, items: Vec<Booking>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Optimistically set a booking's status, returning the previous value
    /// for rollback. `None` when the id is unknown.
    pub fn set_status(&mut self, id: &str, status: BookingStatus) -> Option<BookingStatus> {
        let booking = self.items.iter_mut().find(|item| item.id == id)?;
        let previous = booking.status;
        booking.status = status;
        Some(previous)
    }

    /// Swap in the authoritative booking returned by a mutation.
    pub fn reconcile(&mut self, booking: Booking) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == booking.id) {
            *slot = booking;
        }
    }
}
