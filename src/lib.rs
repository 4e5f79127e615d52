//! Client-side state container for a small social-posting application.
//!
//! A [`Store`] holds one immutable [`Snapshot`] of three slices (auth,
//! users, posts). State changes only through dispatched [`Action`]s, which
//! every slice reducer observes in a fixed order. Asynchronous calls to a
//! [`RemoteSource`](source::RemoteSource) run as [`task::AsyncTask`]s that
//! dispatch started/resolved/rejected actions, with a guard that keeps a
//! second fetch-all from starting while one is outstanding.

pub mod action;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod posts;
pub mod selectors;
pub mod source;
pub mod store;
pub mod task;
pub mod users;

pub use action::{Action, ActionKind};
pub use error::{CreatePostError, ValidationError};
pub use model::{NewPost, Post, ReactionKind, Reactions, User};
pub use store::{Snapshot, Store};
