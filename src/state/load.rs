//! Fetch lifecycle state surfaced directly to views.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// Lifecycle of a single request/response fetch.
///
/// Views branch on this directly: spinner text while `Loading`, content when
/// `Loaded`, a static failure message on `Error`. There is no retry state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No request issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Response received and ingested.
    Loaded,
    /// Request failed; the view renders a static failure message.
    Error,
}
