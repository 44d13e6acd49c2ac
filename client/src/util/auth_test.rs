use super::*;

#[test]
fn default_landing_per_role() {
    assert_eq!(default_landing(Role::Tourist), "/dashboard/tourist/wishlist");
    assert_eq!(default_landing(Role::Guide), "/dashboard/guide/my-listings");
    assert_eq!(default_landing(Role::Admin), "/dashboard/admin/users");
    assert_eq!(default_landing(Role::Unknown), "/");
}

#[test]
fn login_redirect_encodes_the_path() {
    assert_eq!(
        login_redirect("/dashboard/tourist/my-trips"),
        "/login?redirect=%2Fdashboard%2Ftourist%2Fmy-trips"
    );
}

#[test]
fn sanitize_redirect_accepts_same_site_paths() {
    assert_eq!(sanitize_redirect(Some("/listing/l1")), Some("/listing/l1".to_owned()));
    assert_eq!(
        sanitize_redirect(Some("  /dashboard/guide/bookings  ")),
        Some("/dashboard/guide/bookings".to_owned())
    );
}

#[test]
fn sanitize_redirect_rejects_external_targets() {
    assert_eq!(sanitize_redirect(Some("https://evil.example")), None);
    assert_eq!(sanitize_redirect(Some("//evil.example/phish")), None);
    assert_eq!(sanitize_redirect(Some("")), None);
    assert_eq!(sanitize_redirect(None), None);
}

#[test]
fn post_login_destination_prefers_deep_link() {
    assert_eq!(
        post_login_destination(Some("/listing/l1"), Role::Tourist),
        "/listing/l1"
    );
}

#[test]
fn post_login_destination_falls_back_to_role_landing() {
    assert_eq!(
        post_login_destination(Some("https://evil.example"), Role::Guide),
        "/dashboard/guide/my-listings"
    );
    assert_eq!(post_login_destination(None, Role::Admin), "/dashboard/admin/users");
}
