use crate::action::{Action, ActionKind};
use crate::auth::intent::AuthIntent;
use crate::auth::state::AuthState;
use crate::mvi::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = Action;

    fn interest() -> &'static [ActionKind] {
        &[ActionKind::UserLoggedIn, ActionKind::UserLoggedOut]
    }

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::Auth(AuthIntent::UserLoggedIn { username }) => {
                AuthState::logged_in(username.clone())
            }
            Action::Auth(AuthIntent::UserLoggedOut) => AuthState::default(),
            _ => state,
        }
    }
}
