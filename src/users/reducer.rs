use crate::action::{Action, ActionKind};
use crate::mvi::Reducer;
use crate::users::intent::UsersIntent;
use crate::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = Action;

    fn interest() -> &'static [ActionKind] {
        &[ActionKind::UsersFetchResolved]
    }

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            // Full replace: there is one canonical roster and no local edits.
            Action::Users(UsersIntent::FetchResolved { users }) => UsersState {
                users: users.clone(),
            },
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn roster() -> UsersState {
        UsersState {
            users: vec![User::new("0", "Tianna Jenkins"), User::new("1", "Kevin Grant")],
        }
    }

    #[test]
    fn resolved_replaces_roster() {
        let state = UsersReducer::reduce(
            roster(),
            &Action::Users(UsersIntent::FetchResolved {
                users: vec![User::new("2", "Madison Price")],
            }),
        );
        assert_eq!(state.users, vec![User::new("2", "Madison Price")]);
    }

    #[test]
    fn started_and_rejected_leave_roster_untouched() {
        let started = UsersReducer::reduce(roster(), &Action::Users(UsersIntent::FetchStarted));
        assert_eq!(started, roster());

        let rejected = UsersReducer::reduce(
            roster(),
            &Action::Users(UsersIntent::FetchRejected {
                message: "offline".into(),
            }),
        );
        assert_eq!(rejected, roster());
    }

    #[test]
    fn only_resolved_is_observed() {
        assert!(!UsersReducer::observes(&Action::Users(UsersIntent::FetchStarted)));
        assert!(UsersReducer::observes(&Action::Users(UsersIntent::FetchResolved {
            users: vec![]
        })));
    }
}
