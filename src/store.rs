//! The composition root: one snapshot, one writer at a time.
//!
//! Every dispatch takes the store lock, broadcasts the action to the slice
//! reducers in a fixed order (auth, users, posts), swaps in the resulting
//! snapshot and publishes it to subscribers before releasing the lock.
//! Asynchronous tasks enter the same serialized path for each phase.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::action::Action;
use crate::auth::{AuthIntent, AuthReducer, AuthState};
use crate::error::{CreatePostError, ValidationError};
use crate::model::{validate_post_fields, NewPost, Post, ReactionKind, User};
use crate::mvi::{Intent, Reducer};
use crate::posts::{PostsIntent, PostsReducer, PostsState};
use crate::source::{RemoteSource, SourceError};
use crate::task::{AddNewPost, AsyncTask, FetchPosts, FetchUsers, TaskOutcome};
use crate::users::{UsersReducer, UsersState};

/// The state of every slice at one instant.
///
/// Snapshots are never mutated. A slice the action did not change is the
/// same `Arc` in the next snapshot, so readers can skip work with
/// [`Arc::ptr_eq`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub auth: Arc<AuthState>,
    pub users: Arc<UsersState>,
    pub posts: Arc<PostsState>,
}

impl Snapshot {
    pub fn new(auth: AuthState, users: UsersState, posts: PostsState) -> Self {
        Self {
            auth: Arc::new(auth),
            users: Arc::new(users),
            posts: Arc::new(posts),
        }
    }

    /// Identity comparison: true when every slice is the same allocation.
    pub fn is_same(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.auth, &other.auth)
            && Arc::ptr_eq(&self.users, &other.users)
            && Arc::ptr_eq(&self.posts, &other.posts)
    }

    /// Broadcast `action` to every slice and return the next snapshot.
    pub fn apply(&self, action: &Action) -> Snapshot {
        Snapshot {
            auth: reduce_slice::<AuthReducer>(&self.auth, action),
            users: reduce_slice::<UsersReducer>(&self.users, action),
            posts: reduce_slice::<PostsReducer>(&self.posts, action),
        }
    }
}

/// Run one slice reducer, keeping the previous allocation when the slice
/// did not observe the action or came out structurally equal.
fn reduce_slice<R>(current: &Arc<R::State>, action: &Action) -> Arc<R::State>
where
    R: Reducer<Intent = Action>,
{
    if !R::observes(action) {
        return Arc::clone(current);
    }
    let next = R::reduce((**current).clone(), action);
    if next == **current {
        Arc::clone(current)
    } else {
        Arc::new(next)
    }
}

/// Shared handle to the state container. Cloning is cheap.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<Snapshot>,
    source: Arc<dyn RemoteSource>,
    publisher: watch::Sender<Snapshot>,
}

impl Store {
    pub fn new(source: Arc<dyn RemoteSource>) -> Self {
        Self::with_snapshot(source, Snapshot::default())
    }

    /// Start from a preloaded snapshot.
    pub fn with_snapshot(source: Arc<dyn RemoteSource>, snapshot: Snapshot) -> Self {
        let (publisher, _) = watch::channel(snapshot.clone());
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(snapshot),
                source,
                publisher,
            }),
        }
    }

    /// The current snapshot. Never blocks on in-flight network calls.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.state.lock().clone()
    }

    /// Receiver that observes every snapshot a dispatch changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.publisher.subscribe()
    }

    pub fn source(&self) -> &Arc<dyn RemoteSource> {
        &self.inner.source
    }

    /// Apply `action` and return the resulting snapshot.
    pub fn dispatch(&self, action: impl Into<Action>) -> Snapshot {
        let action = action.into();
        let mut state = self.inner.state.lock();
        self.commit(&mut state, &action);
        state.clone()
    }

    /// Evaluate `guard` and, if it holds, dispatch `action`, as one step
    /// with respect to every other dispatch. Returns whether it dispatched.
    pub fn dispatch_if(
        &self,
        guard: impl FnOnce(&Snapshot) -> bool,
        action: impl Into<Action>,
    ) -> bool {
        let mut state = self.inner.state.lock();
        if !guard(&state) {
            return false;
        }
        self.commit(&mut state, &action.into());
        true
    }

    fn commit(&self, state: &mut Snapshot, action: &Action) {
        let next = state.apply(action);
        let changed = !next.is_same(state);

        tracing::debug!(action = action.kind().as_str(), changed, "Dispatch");

        if changed {
            *state = next;
            self.inner.publisher.send_replace(state.clone());
        }
    }

    /// Run `task` through its guard and three phases.
    pub async fn run<T: AsyncTask>(&self, task: &T) -> TaskOutcome<T::Output> {
        if !self.dispatch_if(|snapshot| task.condition(snapshot), task.started()) {
            tracing::debug!(task = task.name(), "Task suppressed by guard");
            return TaskOutcome::Skipped;
        }
        self.settle(task).await.into()
    }

    /// Make the call for a task whose started phase is already dispatched,
    /// then dispatch exactly one of its resolved or rejected phases.
    async fn settle<T: AsyncTask>(&self, task: &T) -> Result<T::Output, SourceError> {
        tracing::debug!(task = task.name(), source = self.source().name(), "Task started");

        match task.call(self.inner.source.as_ref()).await {
            Ok(output) => {
                self.dispatch(task.resolved(&output));
                tracing::info!(task = task.name(), "Task resolved");
                Ok(output)
            }
            Err(error) => {
                self.dispatch(task.rejected(&error));
                tracing::warn!(task = task.name(), error = %error, "Task rejected");
                Err(error)
            }
        }
    }

    /// Log in as `username`. Does not check the roster.
    pub fn login(&self, username: &str) -> Result<(), ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        self.dispatch(AuthIntent::UserLoggedIn {
            username: username.to_string(),
        });
        Ok(())
    }

    /// Log out. The posts slice drops the feed in the same dispatch.
    pub fn logout(&self) {
        self.dispatch(AuthIntent::UserLoggedOut);
    }

    /// Edit a post's title and content. Unknown ids are a silent no-op.
    pub fn update_post(&self, id: &str, title: &str, content: &str) -> Result<(), ValidationError> {
        validate_post_fields(title, content)?;
        self.dispatch(PostsIntent::PostUpdated {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }

    pub fn add_reaction(&self, post_id: &str, reaction: ReactionKind) {
        self.dispatch(PostsIntent::ReactionAdded {
            post_id: post_id.to_string(),
            reaction,
        });
    }

    /// Like [`add_reaction`](Self::add_reaction), parsing the reaction name first.
    pub fn add_reaction_named(&self, post_id: &str, reaction: &str) -> Result<(), ValidationError> {
        let reaction = reaction.parse::<ReactionKind>()?;
        self.add_reaction(post_id, reaction);
        Ok(())
    }

    /// Allow the next fetch-all after a settled one.
    pub fn reset_posts_status(&self) {
        self.dispatch(PostsIntent::FetchStatusReset);
    }

    pub async fn fetch_posts(&self) -> TaskOutcome<Vec<Post>> {
        self.run(&FetchPosts::new()).await
    }

    pub async fn fetch_users(&self) -> TaskOutcome<Vec<User>> {
        self.run(&FetchUsers).await
    }

    /// Save a new post through the source. State changes only on success;
    /// failures are returned to the caller and not recorded.
    ///
    /// Creating a post has no guard, so it always starts.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, CreatePostError> {
        new_post.validate()?;
        let task = AddNewPost { new_post };
        self.dispatch(task.started());
        Ok(self.settle(&task).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::FetchStatus;
    use crate::source::InMemorySource;

    fn store() -> Store {
        Store::new(Arc::new(InMemorySource::seeded()))
    }

    #[test]
    fn unobserved_slices_keep_identity() {
        let store = store();
        let before = store.snapshot();
        let after = store.dispatch(AuthIntent::UserLoggedIn {
            username: "1".into(),
        });

        assert!(!Arc::ptr_eq(&before.auth, &after.auth));
        assert!(Arc::ptr_eq(&before.users, &after.users));
        assert!(Arc::ptr_eq(&before.posts, &after.posts));
    }

    #[test]
    fn noop_dispatch_keeps_whole_snapshot() {
        let store = store();
        let before = store.snapshot();
        let after = store.dispatch(PostsIntent::ReactionAdded {
            post_id: "missing".into(),
            reaction: ReactionKind::Tada,
        });
        assert!(before.is_same(&after));
    }

    #[test]
    fn dispatch_if_respects_guard() {
        let store = store();
        let started = || PostsIntent::FetchStarted {
            request_id: "r1".into(),
        };
        assert!(!store.dispatch_if(|_| false, started()));
        assert_eq!(store.snapshot().posts.status, FetchStatus::Idle);

        assert!(store.dispatch_if(|s| s.posts.status == FetchStatus::Idle, started()));
        assert_eq!(store.snapshot().posts.status, FetchStatus::Pending);
    }

    #[test]
    fn login_rejects_empty_username() {
        let store = store();
        assert_eq!(store.login("  "), Err(ValidationError::EmptyUsername));
        assert!(!store.snapshot().auth.is_logged_in());
    }

    #[test]
    fn subscribers_see_changes_only() {
        let store = store();
        let mut rx = store.subscribe();
        rx.mark_unchanged();

        store.logout();
        assert!(!rx.has_changed().unwrap());

        store.login("2").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().auth.current_username.as_deref(),
            Some("2")
        );
    }
}
