use super::*;

#[test]
fn target_url_joins_base_and_path() {
    assert_eq!(
        target_url("http://backend:4000", "/api/listing?page=2"),
        "http://backend:4000/api/listing?page=2"
    );
}

#[test]
fn target_url_tolerates_trailing_slash_on_base() {
    assert_eq!(target_url("http://backend:4000/", "/api/user/me"), "http://backend:4000/api/user/me");
}

#[test]
fn cookie_headers_cross_in_both_directions() {
    // The whole point of the proxy: session cookies travel to the backend
    // and Set-Cookie travels back.
    assert!(FORWARDED_REQUEST_HEADERS.contains(&header::COOKIE));
    assert!(RELAYED_RESPONSE_HEADERS.contains(&header::SET_COOKIE));
}

#[test]
fn host_and_length_headers_are_not_forwarded() {
    assert!(!FORWARDED_REQUEST_HEADERS.contains(&header::HOST));
    assert!(!FORWARDED_REQUEST_HEADERS.contains(&header::CONTENT_LENGTH));
}
