//! Dark-mode preference handling.
//!
//! The stored preference wins; with nothing stored we follow the OS media
//! query. Persistence is browser-only.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "roamly.dark";

/// Resolve the initial preference from what localStorage held and what the
/// `prefers-color-scheme` query reports.
#[must_use]
pub fn preference_from(stored: Option<&str>, media_prefers_dark: bool) -> bool {
    match stored {
        Some("1") => true,
        Some("0") => false,
        _ => media_prefers_dark,
    }
}

/// Flip and persist the preference, returning the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "1" } else { "0" });
        }
    }
    next
}

/// Initial preference for the current browser; false during SSR so both
/// render passes agree until hydration reads the real value.
#[must_use]
pub fn initial() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window();
        let stored = window
            .as_ref()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let media_dark = window
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false);
        preference_from(stored.as_deref(), media_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
