//! The root action stream.
//!
//! Every dispatched [`Action`] is broadcast to all slices in a fixed order
//! (auth, users, posts). Each slice wraps its own intents in one variant but
//! may register interest in kinds owned by another slice; the posts slice
//! observes [`ActionKind::UserLoggedOut`] this way.

use crate::auth::AuthIntent;
use crate::mvi::Intent;
use crate::posts::PostsIntent;
use crate::users::UsersIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthIntent),
    Users(UsersIntent),
    Posts(PostsIntent),
}

/// Payload-free discriminant of [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    UserLoggedIn,
    UserLoggedOut,
    UsersFetchStarted,
    UsersFetchResolved,
    UsersFetchRejected,
    PostsFetchStarted,
    PostsFetchResolved,
    PostsFetchRejected,
    PostsFetchStatusReset,
    AddNewPostStarted,
    AddNewPostResolved,
    AddNewPostRejected,
    PostUpdated,
    ReactionAdded,
}

impl ActionKind {
    /// Stable name used in logs, `<slice>/<event>`.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::UserLoggedIn => "auth/userLoggedIn",
            ActionKind::UserLoggedOut => "auth/userLoggedOut",
            ActionKind::UsersFetchStarted => "users/fetchUsers/pending",
            ActionKind::UsersFetchResolved => "users/fetchUsers/fulfilled",
            ActionKind::UsersFetchRejected => "users/fetchUsers/rejected",
            ActionKind::PostsFetchStarted => "posts/fetchPosts/pending",
            ActionKind::PostsFetchResolved => "posts/fetchPosts/fulfilled",
            ActionKind::PostsFetchRejected => "posts/fetchPosts/rejected",
            ActionKind::PostsFetchStatusReset => "posts/fetchStatusReset",
            ActionKind::AddNewPostStarted => "posts/addNewPost/pending",
            ActionKind::AddNewPostResolved => "posts/addNewPost/fulfilled",
            ActionKind::AddNewPostRejected => "posts/addNewPost/rejected",
            ActionKind::PostUpdated => "posts/postUpdated",
            ActionKind::ReactionAdded => "posts/reactionAdded",
        }
    }
}

impl Intent for Action {
    type Kind = ActionKind;

    fn kind(&self) -> ActionKind {
        match self {
            Action::Auth(intent) => match intent {
                AuthIntent::UserLoggedIn { .. } => ActionKind::UserLoggedIn,
                AuthIntent::UserLoggedOut => ActionKind::UserLoggedOut,
            },
            Action::Users(intent) => match intent {
                UsersIntent::FetchStarted => ActionKind::UsersFetchStarted,
                UsersIntent::FetchResolved { .. } => ActionKind::UsersFetchResolved,
                UsersIntent::FetchRejected { .. } => ActionKind::UsersFetchRejected,
            },
            Action::Posts(intent) => match intent {
                PostsIntent::FetchStarted { .. } => ActionKind::PostsFetchStarted,
                PostsIntent::FetchResolved { .. } => ActionKind::PostsFetchResolved,
                PostsIntent::FetchRejected { .. } => ActionKind::PostsFetchRejected,
                PostsIntent::FetchStatusReset => ActionKind::PostsFetchStatusReset,
                PostsIntent::AddNewPostStarted => ActionKind::AddNewPostStarted,
                PostsIntent::AddNewPostResolved { .. } => ActionKind::AddNewPostResolved,
                PostsIntent::AddNewPostRejected { .. } => ActionKind::AddNewPostRejected,
                PostsIntent::PostUpdated { .. } => ActionKind::PostUpdated,
                PostsIntent::ReactionAdded { .. } => ActionKind::ReactionAdded,
            },
        }
    }
}

impl From<AuthIntent> for Action {
    fn from(intent: AuthIntent) -> Self {
        Action::Auth(intent)
    }
}

impl From<UsersIntent> for Action {
    fn from(intent: UsersIntent) -> Self {
        Action::Users(intent)
    }
}

impl From<PostsIntent> for Action {
    fn from(intent: PostsIntent) -> Self {
        Action::Posts(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(
            Action::from(AuthIntent::UserLoggedOut).kind(),
            ActionKind::UserLoggedOut
        );
        assert_eq!(
            Action::from(PostsIntent::FetchStarted {
                request_id: "r1".into()
            })
            .kind(),
            ActionKind::PostsFetchStarted
        );
        assert_eq!(
            Action::from(UsersIntent::FetchResolved { users: vec![] }).kind(),
            ActionKind::UsersFetchResolved
        );
    }

    #[test]
    fn kind_names_are_namespaced_by_slice() {
        assert_eq!(ActionKind::UserLoggedOut.as_str(), "auth/userLoggedOut");
        assert!(ActionKind::ReactionAdded.as_str().starts_with("posts/"));
    }
}
