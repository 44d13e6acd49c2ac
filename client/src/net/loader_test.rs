use super::*;

// =============================================================================
// LoaderCache — the per-request memo behind loader idempotence.
// =============================================================================

#[test]
fn cache_miss_then_hit() {
    let cache = LoaderCache::default();
    assert!(cache.get("/api/listing").is_none());
    cache.insert("/api/listing", serde_json::json!([{ "id": "l1" }]));
    assert_eq!(
        cache.get("/api/listing"),
        Some(serde_json::json!([{ "id": "l1" }]))
    );
}

#[test]
fn repeated_load_of_same_path_skips_refetch() {
    // Mirrors DataLoader::fetch_data's cache-first control flow: the second
    // pass must be answered from the memo without another backend call.
    let cache = LoaderCache::default();
    let mut backend_calls = 0;
    for _ in 0..2 {
        if cache.get("/api/meta/languages").is_none() {
            backend_calls += 1;
            cache.insert("/api/meta/languages", serde_json::json!(["English", "French"]));
        }
    }
    assert_eq!(backend_calls, 1);
}

#[test]
fn cache_keys_are_per_path() {
    let cache = LoaderCache::default();
    cache.insert("/api/meta/languages", serde_json::json!(["English"]));
    assert!(cache.get("/api/meta/expertise").is_none());
}

#[test]
fn cloned_cache_shares_entries() {
    // One loader is built per request; clones handed to resources must see
    // each other's results for the memoization to hold.
    let cache = LoaderCache::default();
    let clone = cache.clone();
    cache.insert("/api/listing/l1", serde_json::json!({ "id": "l1" }));
    assert!(clone.get("/api/listing/l1").is_some());
}

// =============================================================================
// join_url
// =============================================================================

#[test]
fn join_url_handles_trailing_slash_on_base() {
    assert_eq!(join_url("http://backend:4000", "/api/listing"), "http://backend:4000/api/listing");
    assert_eq!(join_url("http://backend:4000/", "/api/listing"), "http://backend:4000/api/listing");
}
