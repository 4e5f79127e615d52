//! Model-View-Intent (MVI) primitives for the state container.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store ──┬──→ Reducer (auth)  ──┐
//!    ↑               ├──→ Reducer (users) ──┼──→ Snapshot ──→ Selectors
//!    │               └──→ Reducer (posts) ──┘                    │
//!    └───────────────────────────────────────────────────────────┘
//! ```
//!
//! - **SliceState**: Immutable representation of one partition of the state
//! - **Intent**: Named description of an intended state change
//! - **Reducer**: Pure function that transforms a slice based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
