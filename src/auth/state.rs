use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    /// Id of the logged-in user, if any.
    pub current_username: Option<String>,
}

impl SliceState for AuthState {}

impl AuthState {
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            current_username: Some(username.into()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_username.is_some()
    }
}
