use super::*;

#[test]
fn stored_preference_wins_over_media_query() {
    assert!(preference_from(Some("1"), false));
    assert!(!preference_from(Some("0"), true));
}

#[test]
fn missing_or_garbled_storage_follows_media_query() {
    assert!(preference_from(None, true));
    assert!(!preference_from(None, false));
    assert!(preference_from(Some("yes"), true));
}

#[test]
fn toggle_flips() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
