//! Base trait for intents (actions) in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for intent objects.
///
/// Intents represent:
/// - User actions (login, edit, reaction clicks)
/// - Phases of asynchronous operations (started, resolved, rejected)
///
/// Every intent exposes a `Kind` discriminant so reducers can declare which
/// intents they react to without inspecting payloads.
pub trait Intent: Debug + Send + Sync + 'static {
    /// Payload-free discriminant of the intent.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the discriminant of this intent.
    fn kind(&self) -> Self::Kind;
}
