//! Wishlist state with optimistic remove/restore.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use crate::net::types::WishlistItem;

/// The tourist's saved listings.
#[derive(Clone, Debug, Default)]
pub struct WishlistState {
    pub items: Vec<WishlistItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl WishlistState {
    pub fn replace(&mut self, items: Vec<WishlistItem>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Optimistically remove an entry, returning its position and value so a
    /// failed backend call can restore it where it was.
    pub fn remove(&mut self, id: &str) -> Option<(usize, WishlistItem)> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some((index, self.items.remove(index)))
    }

    /// Undo an optimistic remove.
    pub fn restore(&mut self, index: usize, item: WishlistItem) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// True when the listing is already saved.
    #[must_use]
    pub fn contains_listing(&self, listing_id: &str) -> bool {
        self.items.iter().any(|item| item.listing.id == listing_id)
    }
}
