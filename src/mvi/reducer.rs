//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms one slice of state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a total, pure function: (State, &Intent) -> State.
/// Intents the reducer does not recognize leave the state untouched.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer observes.
    type Intent: Intent;

    /// Intent kinds this reducer reacts to, including kinds owned by
    /// other slices. The store skips the reducer for every other kind.
    fn interest() -> &'static [<Self::Intent as Intent>::Kind];

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State;

    /// Whether this reducer registered interest in `intent`.
    fn observes(intent: &Self::Intent) -> bool {
        Self::interest().contains(&intent.kind())
    }
}
