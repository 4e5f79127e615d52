use async_trait::async_trait;

use crate::action::Action;
use crate::model::User;
use crate::source::{RemoteSource, SourceError};
use crate::users::UsersIntent;

use super::AsyncTask;

/// Load the user roster. Runs once at startup, so it carries no guard.
pub struct FetchUsers;

#[async_trait]
impl AsyncTask for FetchUsers {
    type Output = Vec<User>;

    fn name(&self) -> &'static str {
        "users/fetchUsers"
    }

    fn started(&self) -> Action {
        UsersIntent::FetchStarted.into()
    }

    async fn call(&self, source: &dyn RemoteSource) -> Result<Vec<User>, SourceError> {
        source.fetch_users().await
    }

    fn resolved(&self, output: &Vec<User>) -> Action {
        UsersIntent::FetchResolved {
            users: output.clone(),
        }
        .into()
    }

    fn rejected(&self, error: &SourceError) -> Action {
        UsersIntent::FetchRejected {
            message: error.to_string(),
        }
        .into()
    }
}
