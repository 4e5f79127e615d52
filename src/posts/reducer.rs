use std::sync::Arc;

use crate::action::{Action, ActionKind};
use crate::auth::AuthIntent;
use crate::model::{Post, ReactionKind};
use crate::mvi::Reducer;
use crate::posts::intent::PostsIntent;
use crate::posts::state::{FetchStatus, PostsState};

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = Action;

    fn interest() -> &'static [ActionKind] {
        &[
            ActionKind::UserLoggedOut,
            ActionKind::PostsFetchStarted,
            ActionKind::PostsFetchResolved,
            ActionKind::PostsFetchRejected,
            ActionKind::PostsFetchStatusReset,
            ActionKind::AddNewPostResolved,
            ActionKind::PostUpdated,
            ActionKind::ReactionAdded,
        ]
    }

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            // The feed belongs to the identity that fetched it.
            Action::Auth(AuthIntent::UserLoggedOut) => PostsState::default(),
            Action::Posts(intent) => reduce_posts(state, intent),
            _ => state,
        }
    }
}

fn reduce_posts(state: PostsState, intent: &PostsIntent) -> PostsState {
    match intent {
        PostsIntent::FetchStarted { request_id } => PostsState {
            status: FetchStatus::Pending,
            error: None,
            request_id: Some(request_id.clone()),
            ..state
        },

        // Only the call the slice is waiting on may settle it. A call started
        // before a logout, or superseded by a newer one, is dropped.
        PostsIntent::FetchResolved { request_id, .. }
        | PostsIntent::FetchRejected { request_id, .. }
            if !state.is_awaiting(request_id) =>
        {
            state
        }

        PostsIntent::FetchResolved { posts, .. } => {
            let mut next = PostsState {
                status: FetchStatus::Succeeded,
                error: None,
                request_id: None,
                ..state
            };
            // Append rather than replace: posts created while the fetch was
            // in flight stay in place.
            for post in posts {
                append_unique(&mut next, post);
            }
            next
        }

        PostsIntent::FetchRejected { message, .. } => PostsState {
            status: FetchStatus::Failed,
            error: Some(message.clone()),
            request_id: None,
            ..state
        },

        PostsIntent::FetchStatusReset if !state.status.is_settled() => state,

        PostsIntent::FetchStatusReset => PostsState {
            status: FetchStatus::Idle,
            error: None,
            ..state
        },

        PostsIntent::AddNewPostResolved { post } => {
            let mut next = state;
            append_unique(&mut next, post);
            next
        }

        PostsIntent::PostUpdated { id, title, content } => {
            if title.is_empty() || content.is_empty() {
                return state;
            }
            replace_post(state, id, |post| Post {
                title: title.clone(),
                content: content.clone(),
                ..post.clone()
            })
        }

        PostsIntent::ReactionAdded { post_id, reaction } => {
            replace_post(state, post_id, |post| with_reaction(post, *reaction))
        }

        PostsIntent::AddNewPostStarted | PostsIntent::AddNewPostRejected { .. } => state,
    }
}

/// Ids are unique across the collection; a post already present is kept as is.
fn append_unique(state: &mut PostsState, post: &Post) {
    if !state.contains(&post.id) {
        state.posts.push(Arc::new(post.clone()));
    }
}

/// Swaps in a rebuilt post for `id`. Unknown ids leave the state unchanged.
fn replace_post(mut state: PostsState, id: &str, rebuild: impl FnOnce(&Post) -> Post) -> PostsState {
    if let Some(index) = state.position(id) {
        let updated = rebuild(&state.posts[index]);
        state.posts[index] = Arc::new(updated);
    }
    state
}

fn with_reaction(post: &Post, reaction: ReactionKind) -> Post {
    Post {
        reactions: post.reactions.incremented(reaction),
        ..post.clone()
    }
}
