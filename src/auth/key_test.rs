use super::*;

// =============================================================
// Shape
// =============================================================

#[test]
fn missing_or_empty_key_is_invalid() {
    assert!(!is_valid_publishable_key(None));
    assert!(!is_valid_publishable_key(Some("")));
}

#[test]
fn wrong_prefix_is_invalid() {
    assert!(!is_valid_publishable_key(Some("sk_test_ab12CD34ef56GH78")));
    assert!(!is_valid_publishable_key(Some("pk_prod_ab12CD34ef56GH78")));
    assert!(!is_valid_publishable_key(Some("pk_ab12CD34ef56GH78")));
}

#[test]
fn non_alphanumeric_body_is_invalid() {
    assert!(!is_valid_publishable_key(Some("pk_test_ab12CD34ef56GH7!")));
    assert!(!is_valid_publishable_key(Some("pk_test_ab12CD34_ef56GH78")));
}

#[test]
fn short_body_is_invalid() {
    assert!(!is_valid_publishable_key(Some("pk_test_abc123")));
    assert!(!is_valid_publishable_key(Some("pk_live_ab12CD34ef56GH7")));
}

// =============================================================
// Placeholder heuristic
// =============================================================

#[test]
fn all_zero_body_is_invalid() {
    assert!(!is_valid_publishable_key(Some("pk_test_0000000000000000")));
    assert!(!is_valid_publishable_key(Some(
        "pk_live_000000000000000000000000"
    )));
}

#[test]
fn body_with_some_zeros_is_valid() {
    assert!(is_valid_publishable_key(Some("pk_test_00000000000000001")));
}

// =============================================================
// Well-formed keys
// =============================================================

#[test]
fn well_formed_test_and_live_keys_are_valid() {
    assert!(is_valid_publishable_key(Some("pk_test_a1b2c3d4e5f6g7h8i9j0")));
    assert!(is_valid_publishable_key(Some("pk_live_ab12CD34ef56GH78")));
}

#[test]
fn minimum_body_length_is_sixteen() {
    assert!(is_valid_publishable_key(Some("pk_test_abcdefgh12345678")));
}

#[test]
fn auth_enabled_for_matches_validator() {
    for candidate in [
        None,
        Some(""),
        Some("pk_test_0000000000000000"),
        Some("pk_live_ab12CD34ef56GH78"),
        Some("not-a-key"),
    ] {
        assert_eq!(auth_enabled_for(candidate), is_valid_publishable_key(candidate));
    }
}
