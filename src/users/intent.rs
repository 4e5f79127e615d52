use crate::model::User;

/// Phases of the users fetch. Only the resolved phase changes state.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersIntent {
    FetchStarted,
    FetchResolved { users: Vec<User> },
    FetchRejected { message: String },
}
