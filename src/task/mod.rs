//! Asynchronous operations as three ordinary actions.
//!
//! Every [`AsyncTask`] run by the store follows the same shape:
//!
//! ```text
//!          guard false
//! Idle ───────────────────→ Skipped        (nothing dispatched, no call made)
//!   │
//!   │ guard true: dispatch started()       (guard + dispatch under one lock)
//!   ↓
//! Started ── call ok ─────→ Resolved       dispatch resolved(value)
//!   │
//!   └─────── call err ────→ Rejected       dispatch rejected(error)
//! ```
//!
//! Slices never see futures; they only react to the dispatched actions.
//! There is no timeout or cancellation: a call that never returns leaves
//! the task in `Started`.

mod posts;
mod users;

use async_trait::async_trait;

use crate::action::Action;
use crate::source::{RemoteSource, SourceError};
use crate::store::Snapshot;

pub use posts::{AddNewPost, FetchPosts};
pub use users::FetchUsers;

/// A named asynchronous operation with a guard and three phase actions.
#[async_trait]
pub trait AsyncTask: Send + Sync {
    /// Value produced by a successful call.
    type Output: Send;

    /// Returns the name of this task for logging.
    fn name(&self) -> &'static str;

    /// Guard predicate, evaluated against the current snapshot in the same
    /// critical section that dispatches [`started`](Self::started).
    ///
    /// Default implementation always allows the task to run.
    fn condition(&self, _snapshot: &Snapshot) -> bool {
        true
    }

    fn started(&self) -> Action;

    /// The suspending call to the network collaborator.
    async fn call(&self, source: &dyn RemoteSource) -> Result<Self::Output, SourceError>;

    fn resolved(&self, output: &Self::Output) -> Action;

    fn rejected(&self, error: &SourceError) -> Action;
}

/// Final phase of one task run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    /// The guard held and `resolved` was dispatched.
    Resolved,
    /// The guard held and `rejected` was dispatched.
    Rejected,
    /// The guard failed; nothing was dispatched.
    Skipped,
}

/// Result of running a task through the store.
#[derive(Debug)]
pub enum TaskOutcome<T> {
    /// The guard suppressed the task.
    Skipped,
    Fulfilled(T),
    Rejected(SourceError),
}

impl<T> TaskOutcome<T> {
    pub fn phase(&self) -> TaskPhase {
        match self {
            TaskOutcome::Skipped => TaskPhase::Skipped,
            TaskOutcome::Fulfilled(_) => TaskPhase::Resolved,
            TaskOutcome::Rejected(_) => TaskPhase::Rejected,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TaskOutcome::Skipped)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            TaskOutcome::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            TaskOutcome::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> From<Result<T, SourceError>> for TaskOutcome<T> {
    fn from(result: Result<T, SourceError>) -> Self {
        match result {
            Ok(value) => TaskOutcome::Fulfilled(value),
            Err(error) => TaskOutcome::Rejected(error),
        }
    }
}
