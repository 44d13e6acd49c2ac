use super::*;

use crate::net::types::ListingSummary;

fn item(id: &str, listing_id: &str) -> WishlistItem {
    WishlistItem {
        id: id.to_owned(),
        listing: ListingSummary {
            id: listing_id.to_owned(),
            title: "Harbor Kayak".to_owned(),
            destination: "Bergen".to_owned(),
            daily_rate: 110.0,
            photo: None,
            languages: Vec::new(),
            guide_name: None,
            rating: None,
        },
    }
}

#[test]
fn remove_returns_position_and_item() {
    let mut state = WishlistState::default();
    state.replace(vec![item("w1", "l1"), item("w2", "l2"), item("w3", "l3")]);
    let (index, removed) = state.remove("w2").expect("known id");
    assert_eq!(index, 1);
    assert_eq!(removed.id, "w2");
    assert_eq!(state.items.len(), 2);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut state = WishlistState::default();
    state.replace(vec![item("w1", "l1")]);
    assert!(state.remove("w9").is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn restore_puts_item_back_in_place() {
    let mut state = WishlistState::default();
    state.replace(vec![item("w1", "l1"), item("w2", "l2"), item("w3", "l3")]);
    let (index, removed) = state.remove("w2").expect("known id");
    state.restore(index, removed);
    let ids: Vec<&str> = state.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w2", "w3"]);
}

#[test]
fn restore_clamps_out_of_range_index() {
    let mut state = WishlistState::default();
    state.replace(vec![item("w1", "l1")]);
    state.restore(5, item("w2", "l2"));
    assert_eq!(state.items.last().map(|i| i.id.as_str()), Some("w2"));
}

#[test]
fn contains_listing_checks_inner_listing_id() {
    let mut state = WishlistState::default();
    state.replace(vec![item("w1", "l1")]);
    assert!(state.contains_listing("l1"));
    assert!(!state.contains_listing("w1"));
}
