use super::*;

use crate::net::types::SessionUser;

fn resolved(role: Role) -> AuthState {
    AuthState {
        user: Some(SessionUser {
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
        }),
        loading: false,
    }
}

#[test]
fn pending_while_probe_unresolved() {
    let state = AuthState::default();
    assert_eq!(
        evaluate(&state, &[Role::Admin], "/dashboard/admin/users"),
        Access::Pending
    );
}

#[test]
fn unauthenticated_redirects_to_login_with_deep_link() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(
        evaluate(&state, &[Role::Tourist], "/dashboard/tourist/my-trips"),
        Access::LoginRedirect("/login?redirect=%2Fdashboard%2Ftourist%2Fmy-trips".to_owned())
    );
}

#[test]
fn wrong_role_redirects_to_own_landing() {
    assert_eq!(
        evaluate(&resolved(Role::Guide), &[Role::Admin], "/dashboard/admin/users"),
        Access::RoleRedirect("/dashboard/guide/my-listings")
    );
}

#[test]
fn matching_role_is_granted() {
    assert_eq!(
        evaluate(&resolved(Role::Admin), &[Role::Admin], "/dashboard/admin/users"),
        Access::Granted
    );
}

#[test]
fn any_listed_role_is_granted() {
    let allow = [Role::Tourist, Role::Guide, Role::Admin];
    assert_eq!(evaluate(&resolved(Role::Guide), &allow, "/profile"), Access::Granted);
}

#[test]
fn unknown_role_falls_back_to_home() {
    assert_eq!(
        evaluate(&resolved(Role::Unknown), &[Role::Tourist], "/dashboard/tourist/wishlist"),
        Access::RoleRedirect("/")
    );
}

#[test]
fn still_pending_even_when_allow_list_is_empty() {
    // Loading wins over every other consideration: nothing renders and
    // nothing redirects until the probe resolves once.
    assert_eq!(evaluate(&AuthState::default(), &[], "/profile"), Access::Pending);
}
