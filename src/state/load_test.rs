use super::*;

#[test]
fn load_state_starts_idle() {
    assert_eq!(LoadState::default(), LoadState::Idle);
}

#[test]
fn begin_enters_loading_from_any_state() {
    for mut state in [
        LoadState::Idle,
        LoadState::Loading,
        LoadState::Loaded,
        LoadState::Error("boom".to_owned()),
    ] {
        state.begin();
        assert_eq!(state, LoadState::Loading);
    }
}

#[test]
fn succeed_and_fail_settle_a_loading_fetch() {
    let mut state = LoadState::Loading;
    state.succeed();
    assert_eq!(state, LoadState::Loaded);

    let mut state = LoadState::Loading;
    state.fail("Unable to load boards.");
    assert_eq!(state, LoadState::Error("Unable to load boards.".to_owned()));
}

#[test]
fn error_accessor_only_reports_failures() {
    assert_eq!(LoadState::Idle.error(), None);
    assert_eq!(LoadState::Loaded.error(), None);
    assert_eq!(
        LoadState::Error("nope".to_owned()).error(),
        Some("nope")
    );
}

#[test]
fn is_loading_tracks_in_flight_fetches_only() {
    assert!(LoadState::Loading.is_loading());
    assert!(!LoadState::Idle.is_loading());
    assert!(!LoadState::Loaded.is_loading());
    assert!(!LoadState::Error(String::new()).is_loading());
}
