//! The posts slice: the feed plus the fetch-all lifecycle.
//!
//! ```text
//!        FetchStarted          FetchResolved
//! Idle ───────────────→ Pending ─────────────→ Succeeded
//!  ↑                       │                       │
//!  │                       │ FetchRejected         │
//!  │                       ↓                       │
//!  ├─── FetchStatusReset ─ Failed                  │
//!  └─── FetchStatusReset ──────────────────────────┘
//! ```
//!
//! Logging out resets the whole slice to `Idle` with no posts. Each fetch-all
//! carries a request id; the slice remembers the one it is waiting on and
//! drops resolved or rejected phases for any other. A reset only applies to
//! a settled fetch.

mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use selectors::{
    select_all_posts, select_post_by_id, select_posts_by_user, select_posts_error,
    select_posts_status,
};
pub use state::{FetchStatus, PostsState};
