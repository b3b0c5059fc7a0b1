use super::*;

// =============================================================
// Base URL
// =============================================================

#[test]
fn normalize_base_defaults_when_unset_or_empty() {
    assert_eq!(normalize_base(None), "http://localhost:8000");
    assert_eq!(normalize_base(Some("")), "http://localhost:8000");
}

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base(Some("https://api.example.com/")), "https://api.example.com");
    assert_eq!(normalize_base(Some("https://api.example.com///")), "https://api.example.com");
}

#[test]
fn normalize_base_leaves_clean_urls_alone() {
    assert_eq!(normalize_base(Some("http://127.0.0.1:9000")), "http://127.0.0.1:9000");
}

// =============================================================
// Headers
// =============================================================

#[test]
fn bearer_value_wraps_present_tokens() {
    assert_eq!(bearer_value(Some("tok_abc")), "Bearer tok_abc");
}

#[test]
fn bearer_value_is_empty_for_absent_tokens() {
    assert_eq!(bearer_value(None), "");
}

// =============================================================
// Paths
// =============================================================

#[test]
fn endpoint_paths_match_the_api_surface() {
    assert_eq!(boards_path(), "/api/v1/boards");
    assert_eq!(board_path("b-1"), "/api/v1/boards/b-1");
    assert_eq!(board_tasks_path("b-1"), "/api/v1/boards/b-1/tasks");
    assert_eq!(wiki_path(), "/api/v1/wiki");
    assert_eq!(wiki_page_path("w-1"), "/api/v1/wiki/w-1");
}

// =============================================================
// Failure normalization
// =============================================================

#[test]
fn require_body_maps_absent_bodies_to_decode_failure() {
    assert_eq!(require_body(Some(1)), Ok(1));
    assert_eq!(require_body::<i32>(None), Err(FetchError::Decode));
}

#[test]
fn fetch_error_messages_stay_generic() {
    assert_eq!(FetchError::Network.to_string(), "request failed");
    assert_eq!(FetchError::Status(500).to_string(), "request failed with status 500");
    assert_eq!(FetchError::Decode.to_string(), "malformed response body");
}

// =============================================================
// Join semantics
// =============================================================

#[test]
fn join_outcomes_passes_both_successes_through() {
    assert_eq!(join_outcomes::<_, _, FetchError>(Ok(1), Ok("a")), Ok((1, "a")));
}

#[test]
fn join_outcomes_first_failure_wins() {
    assert_eq!(
        join_outcomes::<i32, &str, _>(Err("board"), Err("tasks")),
        Err("board")
    );
}

#[test]
fn join_outcomes_fails_when_either_side_fails() {
    assert_eq!(join_outcomes::<i32, _, _>(Err("board"), Ok("a")), Err("board"));
    assert_eq!(join_outcomes::<_, &str, _>(Ok(1), Err("tasks")), Err("tasks"));
}
