use super::*;

#[test]
fn guide_patch_includes_expertise_and_rate() {
    let patch = profile_patch(
        " Dakar food walks ",
        "https://cdn.example/me.jpg",
        "French, Wolof",
        "Food, Markets",
        "",
        "120",
        Role::Guide,
    )
    .expect("valid");
    assert_eq!(patch["bio"], "Dakar food walks");
    assert_eq!(patch["profilePicture"], "https://cdn.example/me.jpg");
    assert_eq!(patch["languages"], serde_json::json!(["French", "Wolof"]));
    assert_eq!(patch["expertise"], serde_json::json!(["Food", "Markets"]));
    assert_eq!(patch["dailyRate"], 120.0);
    assert!(patch.get("travelPreferences").is_none());
}

#[test]
fn tourist_patch_includes_preferences_not_rate() {
    let patch = profile_patch("", "", "English", "", "Food, Hiking", "120", Role::Tourist).expect("valid");
    assert_eq!(patch["travelPreferences"], serde_json::json!(["Food", "Hiking"]));
    assert!(patch.get("dailyRate").is_none());
    assert!(patch.get("expertise").is_none());
}

#[test]
fn empty_picture_clears_the_field() {
    let patch = profile_patch("", "   ", "", "", "", "", Role::Admin).expect("valid");
    assert_eq!(patch["profilePicture"], serde_json::Value::Null);
}

#[test]
fn guide_rate_must_parse_when_present() {
    assert_eq!(
        profile_patch("", "", "", "", "", "a lot", Role::Guide),
        Err("Daily rate must be a number.")
    );
    assert_eq!(
        profile_patch("", "", "", "", "", "-3", Role::Guide),
        Err("Daily rate must be positive.")
    );
}

#[test]
fn guide_rate_is_optional() {
    let patch = profile_patch("", "", "", "", "", "   ", Role::Guide).expect("valid");
    assert!(patch.get("dailyRate").is_none());
}
