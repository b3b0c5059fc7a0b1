//! Per-page render-phase gate.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::load::LoadState;

/// The render branch a page is in right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// Not signed in; render the sign-in prompt regardless of fetch state.
    SignedOut,
    /// A fetch is in flight (or has not started for this page instance).
    Loading,
    /// The last fetch failed; render the page's message, no auto-retry.
    Error(String),
    /// Fetch succeeded with an empty collection.
    Empty,
    /// Fetch succeeded with data.
    Populated,
}

/// Decide the render branch, evaluated top-down: auth wins over fetch state,
/// fetch state wins over data shape. `Idle` maps to `Loading` because a page
/// that has not fetched yet is about to; leaving and returning always
/// restarts here.
pub fn view_phase(signed_in: bool, load: &LoadState, item_count: usize) -> ViewPhase {
    if !signed_in {
        return ViewPhase::SignedOut;
    }
    match load {
        LoadState::Idle | LoadState::Loading => ViewPhase::Loading,
        LoadState::Error(message) => ViewPhase::Error(message.clone()),
        LoadState::Loaded if item_count == 0 => ViewPhase::Empty,
        LoadState::Loaded => ViewPhase::Populated,
    }
}
