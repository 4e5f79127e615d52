use crate::model::User;
use crate::mvi::SliceState;

/// The roster of known users, in the order the source returned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    pub users: Vec<User>,
}

impl SliceState for UsersState {}

impl UsersState {
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}
