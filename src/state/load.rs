//! Fetch lifecycle for a single page's data.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// Load state for one page's current fetch.
///
/// Transitions are strictly `Idle → Loading → {Loaded, Error}`; a new fetch
/// re-enters `Loading` from any state. Nothing is cached across navigations:
/// each page instance starts at `Idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has been issued yet for this page instance.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed and its result replaced the page data.
    Loaded,
    /// The last fetch failed; holds the page's static user-facing message.
    Error(String),
}

impl LoadState {
    /// Enter `Loading` for a new fetch.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Record a completed fetch.
    pub fn succeed(&mut self) {
        *self = Self::Loaded;
    }

    /// Record a failed fetch with the page's message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
