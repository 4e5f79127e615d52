mod common;

use chirper::auth::{AuthIntent, AuthState};
use chirper::model::ReactionKind;
use chirper::mvi::Reducer;
use chirper::posts::{FetchStatus, PostsIntent, PostsReducer, PostsState};
use chirper::users::UsersState;
use chirper::{Action, Snapshot};
use common::{post, post_at};

#[test]
fn fetch_lifecycle_idle_pending_succeeded() {
    let state = PostsState::default();
    assert_eq!(state.status, FetchStatus::Idle);

    let state = PostsReducer::reduce(
        state,
        &Action::Posts(PostsIntent::FetchStarted {
            request_id: "r1".into(),
        }),
    );
    assert_eq!(state.status, FetchStatus::Pending);

    let state = PostsReducer::reduce(
        state,
        &Action::Posts(PostsIntent::FetchResolved {
            request_id: "r1".into(),
            posts: vec![post("1")],
        }),
    );
    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.posts.len(), 1);
    assert_eq!(*state.posts[0], post("1"));
    assert!(state.error.is_none());
}

#[test]
fn logout_clears_auth_and_posts_in_one_dispatch() {
    let snapshot = Snapshot::new(
        AuthState::logged_in("2"),
        UsersState::default(),
        PostsState::with_posts([post("A"), post("B")], FetchStatus::Succeeded),
    );

    let next = snapshot.apply(&Action::Auth(AuthIntent::UserLoggedOut));

    assert_eq!(next.auth.current_username, None);
    assert!(next.posts.posts.is_empty());
    assert_eq!(next.posts.status, FetchStatus::Idle);
    assert_eq!(next.posts.error, None);
}

#[test]
fn logout_resets_regardless_of_post_count() {
    for n in [0usize, 1, 7, 50] {
        let posts = (0..n).map(|i| post(&i.to_string()));
        let snapshot = Snapshot::new(
            AuthState::logged_in("1"),
            UsersState::default(),
            PostsState::with_posts(posts, FetchStatus::Succeeded),
        );
        let next = snapshot.apply(&Action::Auth(AuthIntent::UserLoggedOut));
        assert_eq!(*next.posts, PostsState::default(), "n = {n}");
    }
}

#[test]
fn logout_also_clears_failed_fetch() {
    let failed = PostsState {
        status: FetchStatus::Failed,
        error: Some("Network down".into()),
        ..PostsState::default()
    };
    let state = PostsReducer::reduce(failed, &Action::Auth(AuthIntent::UserLoggedOut));
    assert_eq!(state, PostsState::default());
}

#[test]
fn thumbs_up_twice() {
    let mut state = PostsState::with_posts([post("1")], FetchStatus::Succeeded);
    for _ in 0..2 {
        state = PostsReducer::reduce(
            state,
            &Action::Posts(PostsIntent::ReactionAdded {
                post_id: "1".into(),
                reaction: ReactionKind::ThumbsUp,
            }),
        );
    }
    let reactions = state.posts[0].reactions;
    assert_eq!(reactions.thumbs_up, 2);
    for kind in [
        ReactionKind::Tada,
        ReactionKind::Heart,
        ReactionKind::Rocket,
        ReactionKind::Eyes,
    ] {
        assert_eq!(reactions.get(kind), 0);
    }
}

#[test]
fn every_reaction_kind_increments_only_itself() {
    let original = PostsState::with_posts([post_at("1", "0", 1), post_at("2", "1", 2)], FetchStatus::Succeeded);
    for kind in ReactionKind::ALL {
        let state = PostsReducer::reduce(
            original.clone(),
            &Action::Posts(PostsIntent::ReactionAdded {
                post_id: "2".into(),
                reaction: kind,
            }),
        );
        assert_eq!(state.posts[0], original.posts[0]);
        let before = &original.posts[1];
        let after = &state.posts[1];
        for other in ReactionKind::ALL {
            let expected = before.reactions.get(other) + u32::from(other == kind);
            assert_eq!(after.reactions.get(other), expected);
        }
        assert_eq!(after.title, before.title);
        assert_eq!(after.date, before.date);
        assert_eq!(state.status, original.status);
    }
}

#[test]
fn reaction_on_unknown_post_keeps_snapshot_identity() {
    let snapshot = Snapshot::new(
        AuthState::logged_in("0"),
        UsersState::default(),
        PostsState::with_posts([post("1")], FetchStatus::Succeeded),
    );
    let next = snapshot.apply(&Action::Posts(PostsIntent::ReactionAdded {
        post_id: "nope".into(),
        reaction: ReactionKind::Rocket,
    }));
    assert!(next.is_same(&snapshot));
    assert_eq!(next, snapshot);
}

#[test]
fn edit_never_touches_immutable_fields() {
    let mut original = post_at("1", "2", 30);
    original.reactions.heart = 4;
    let state = PostsReducer::reduce(
        PostsState::with_posts([original.clone()], FetchStatus::Succeeded),
        &Action::Posts(PostsIntent::PostUpdated {
            id: "1".into(),
            title: "New title".into(),
            content: "New content".into(),
        }),
    );
    let edited = &state.posts[0];
    assert_eq!(edited.id, original.id);
    assert_eq!(edited.date, original.date);
    assert_eq!(edited.user, original.user);
    assert_eq!(edited.reactions, original.reactions);
    assert_eq!(edited.title, "New title");
    assert_eq!(edited.content, "New content");
}

#[test]
fn edit_with_empty_content_is_ignored() {
    let original = PostsState::with_posts([post("1")], FetchStatus::Succeeded);
    let state = PostsReducer::reduce(
        original.clone(),
        &Action::Posts(PostsIntent::PostUpdated {
            id: "1".into(),
            title: "Title".into(),
            content: String::new(),
        }),
    );
    assert_eq!(state, original);
}

#[test]
fn failed_fetch_reset_returns_to_idle_keeping_posts() {
    let failed = PostsState {
        status: FetchStatus::Failed,
        error: Some("boom".into()),
        ..PostsState::with_posts([post("1")], FetchStatus::Failed)
    };
    let state = PostsReducer::reduce(failed, &Action::Posts(PostsIntent::FetchStatusReset));
    assert_eq!(state.status, FetchStatus::Idle);
    assert_eq!(state.error, None);
    assert_eq!(state.posts.len(), 1);
}

#[test]
fn reset_only_applies_to_settled_fetch() {
    let pending = PostsState {
        request_id: Some("r1".into()),
        ..PostsState::with_posts([post("1")], FetchStatus::Pending)
    };
    let state = PostsReducer::reduce(
        pending.clone(),
        &Action::Posts(PostsIntent::FetchStatusReset),
    );
    assert_eq!(state, pending);

    let succeeded = PostsState::with_posts([post("1")], FetchStatus::Succeeded);
    let state = PostsReducer::reduce(succeeded, &Action::Posts(PostsIntent::FetchStatusReset));
    assert_eq!(state.status, FetchStatus::Idle);
    assert_eq!(state.posts.len(), 1);
}
