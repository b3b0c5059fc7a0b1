use super::*;

// =============================================================
// Signed-out dominance
// =============================================================

#[test]
fn signed_out_wins_over_every_fetch_outcome() {
    for load in [
        LoadState::Idle,
        LoadState::Loading,
        LoadState::Loaded,
        LoadState::Error("boom".to_owned()),
    ] {
        for count in [0, 3] {
            assert_eq!(view_phase(false, &load, count), ViewPhase::SignedOut);
        }
    }
}

// =============================================================
// Signed-in branches
// =============================================================

#[test]
fn idle_and_loading_both_render_loading() {
    assert_eq!(view_phase(true, &LoadState::Idle, 0), ViewPhase::Loading);
    assert_eq!(view_phase(true, &LoadState::Loading, 5), ViewPhase::Loading);
}

#[test]
fn failed_fetch_renders_error_with_message() {
    assert_eq!(
        view_phase(true, &LoadState::Error("Unable to load boards.".to_owned()), 5),
        ViewPhase::Error("Unable to load boards.".to_owned())
    );
}

#[test]
fn empty_successful_fetch_renders_empty() {
    assert_eq!(view_phase(true, &LoadState::Loaded, 0), ViewPhase::Empty);
}

#[test]
fn non_empty_successful_fetch_renders_populated() {
    assert_eq!(view_phase(true, &LoadState::Loaded, 4), ViewPhase::Populated);
}
