//! Publishable-key validation for the identity provider.
//!
//! DESIGN
//! ======
//! Secretless environments (CI, preview builds) must render every page
//! without ever initializing the identity provider, so enabledness is derived
//! from one pure predicate over the configured key. The mount guard and every
//! auth-aware component consult `auth_enabled_for` and nothing else; a second
//! check with different logic would let a child render provider components
//! the root never mounted.

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;

/// Decide whether `candidate` is a well-formed publishable key.
///
/// Keys look like `pk_test_<body>` or `pk_live_<body>` with an alphanumeric
/// body of at least 16 characters. The provider validates key *contents*, not
/// just shape, so an all-zero body (the usual placeholder in secretless
/// builds) is rejected as well. Total over all inputs; never panics.
pub fn is_valid_publishable_key(candidate: Option<&str>) -> bool {
    let Some(key) = candidate else {
        return false;
    };
    let Some(rest) = key.strip_prefix("pk_") else {
        return false;
    };
    let Some(body) = rest
        .strip_prefix("test_")
        .or_else(|| rest.strip_prefix("live_"))
    else {
        return false;
    };
    if body.len() < 16 {
        return false;
    }
    if !body.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    if body.chars().all(|c| c == '0') {
        return false;
    }
    true
}

/// The publishable key baked into this build, if any.
pub fn configured_publishable_key() -> Option<&'static str> {
    option_env!("MISSION_CONTROL_PUBLISHABLE_KEY")
}

/// Single source of truth for "is the identity provider enabled" given a
/// candidate key. The provider mount guard and the facade both go through
/// this function, which keeps `mounted == facade_reports_enabled` for every
/// credential value.
pub fn auth_enabled_for(candidate: Option<&str>) -> bool {
    is_valid_publishable_key(candidate)
}

/// Enabledness for the key configured in this build.
pub fn auth_enabled() -> bool {
    auth_enabled_for(configured_publishable_key())
}
