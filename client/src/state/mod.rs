//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `listings`, `bookings`, etc.) so
//! individual components can depend on small focused models. Pages own the
//! fetch orchestration; these modules hold the data and pure transitions.

pub mod auth;
pub mod bookings;
pub mod listings;
pub mod ui;
pub mod wishlist;
