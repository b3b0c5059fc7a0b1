use super::*;

// =============================================================
// Hosted URLs
// =============================================================

#[test]
fn live_keys_use_production_identity_origin() {
    assert_eq!(
        hosted_identity_origin("pk_live_ab12CD34ef56GH78"),
        "https://id.openclaw.app"
    );
}

#[test]
fn test_keys_use_test_identity_origin() {
    assert_eq!(
        hosted_identity_origin("pk_test_ab12CD34ef56GH78"),
        "https://id-test.openclaw.app"
    );
}

#[test]
fn sign_in_url_carries_key_and_redirect() {
    assert_eq!(
        hosted_sign_in_url("pk_test_ab12CD34ef56GH78", "/boards"),
        "https://id-test.openclaw.app/sign-in?publishable_key=pk_test_ab12CD34ef56GH78&redirect_url=/boards"
    );
}

// =============================================================
// Redirect fragment
// =============================================================

#[test]
fn session_fragment_parses_user_and_token() {
    let session = session_from_fragment("#session=user_1:tok_abc").expect("session");
    assert_eq!(session.user_id, "user_1");
    assert_eq!(session.token, "tok_abc");
}

#[test]
fn session_fragment_accepts_missing_hash_prefix() {
    assert!(session_from_fragment("session=u:t").is_some());
}

#[test]
fn session_fragment_token_may_contain_colons() {
    let session = session_from_fragment("#session=u1:a:b:c").expect("session");
    assert_eq!(session.token, "a:b:c");
}

#[test]
fn unrelated_or_partial_fragments_are_rejected() {
    assert!(session_from_fragment("").is_none());
    assert!(session_from_fragment("#other=1").is_none());
    assert!(session_from_fragment("#session=").is_none());
    assert!(session_from_fragment("#session=useronly").is_none());
    assert!(session_from_fragment("#session=:token").is_none());
    assert!(session_from_fragment("#session=user:").is_none());
}

#[test]
fn provider_session_round_trips_through_json() {
    let session = ProviderSession {
        user_id: "user_1".to_owned(),
        token: "tok_abc".to_owned(),
    };
    let raw = serde_json::to_string(&session).expect("serialize");
    let back: ProviderSession = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, session);
}
