//! Guide-listing state.
//!
//! DESIGN
//! ======
//! Public browse results live in SSR-capable resources on the page itself;
//! this module holds the guide dashboard's mutable listing inventory and its
//! pure transitions, so create/edit/status flows are testable without a
//! browser.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::types::{Listing, ListingStatus};

/// The signed-in guide's own listings, including inactive ones.
#[derive(Clone, Debug, Default)]
pub struct MyListingsState {
    pub items: Vec<Listing>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MyListingsState {
    pub fn replace(&mut self, items: Vec<Listing>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Insert a freshly created listing at the top of the list.
    pub fn prepend(&mut self, listing: Listing) {
        self.items.insert(0, listing);
    }

    /// Swap in an updated listing; unknown ids are inserted at the top.
    pub fn upsert(&mut self, listing: Listing) {
        match self.items.iter_mut().find(|item| item.id == listing.id) {
            Some(slot) => *slot = listing,
            None => self.items.insert(0, listing),
        }
    }

    /// Optimistically set a listing's status, returning the previous value
    /// for rollback. `None` when the id is unknown.
    pub fn set_status(&mut self, id: &str, status: ListingStatus) -> Option<ListingStatus> {
        let listing = self.items.iter_mut().find(|item| item.id == id)?;
        let previous = listing.status;
        listing.status = status;
        Some(previous)
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }
}
