use super::*;

use crate::net::types::Role;

fn user(role: Role) -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        name: "Noa".to_owned(),
        email: "noa@example.com".to_owned(),
        role,
        profile_picture: None,
        bio: None,
        languages: None,
        expertise: None,
        travel_preferences: None,
        daily_rate: None,
    }
}

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolving_a_user_authenticates() {
    let mut state = AuthState::default();
    state.resolve(Some(user(Role::Tourist)));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolving_none_clears_user_and_loading() {
    let mut state = AuthState::default();
    state.resolve(Some(user(Role::Guide)));
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn authenticated_implies_resolved_user() {
    // The invariant behind every guard: is_authenticated() cannot be true
    // without a user object present.
    let mut state = AuthState::default();
    assert!(!state.is_authenticated());
    state.resolve(None);
    assert!(!state.is_authenticated());
    state.resolve(Some(user(Role::Admin)));
    assert_eq!(state.is_authenticated(), state.user.is_some());
}
