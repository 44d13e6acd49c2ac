use super::*;

// Uses from_lookup with closures instead of mutating real process
// environment variables, which would race with parallel tests.

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_owned())
    }
}

#[test]
fn minimal_config_uses_default_port() {
    let config = Config::from_lookup(lookup(&[("BACKEND_API_URL", "http://backend:4000")])).expect("valid");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.backend_api_url, "http://backend:4000");
}

#[test]
fn backend_url_trailing_slash_is_trimmed() {
    let config = Config::from_lookup(lookup(&[("BACKEND_API_URL", "http://backend:4000/ ")])).expect("valid");
    assert_eq!(config.backend_api_url, "http://backend:4000");
}

#[test]
fn missing_backend_url_is_an_error() {
    let error = Config::from_lookup(lookup(&[])).expect_err("missing");
    assert_eq!(error.to_string(), "BACKEND_API_URL is required");
}

#[test]
fn empty_backend_url_is_an_error() {
    assert!(Config::from_lookup(lookup(&[("BACKEND_API_URL", "  ")])).is_err());
}

#[test]
fn explicit_port_is_parsed() {
    let config = Config::from_lookup(lookup(&[
        ("BACKEND_API_URL", "http://backend:4000"),
        ("PORT", " 8080 "),
    ]))
    .expect("valid");
    assert_eq!(config.port, 8080);
}

#[test]
fn garbage_port_is_an_error() {
    let error = Config::from_lookup(lookup(&[
        ("BACKEND_API_URL", "http://backend:4000"),
        ("PORT", "eighty"),
    ]))
    .expect_err("invalid");
    assert!(error.to_string().starts_with("invalid PORT"));
}
