use crate::model::User;
use crate::store::Snapshot;

/// Display name used when a post references a user the roster doesn't know.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

pub fn select_all_users(snapshot: &Snapshot) -> &[User] {
    &snapshot.users.users
}

/// Not found is a valid outcome, reported as `None`.
pub fn select_user_by_id<'a>(snapshot: &'a Snapshot, id: &str) -> Option<&'a User> {
    snapshot.users.find(id)
}

pub fn select_user_name<'a>(snapshot: &'a Snapshot, id: &str) -> &'a str {
    select_user_by_id(snapshot, id)
        .map(|user| user.name.as_str())
        .unwrap_or(UNKNOWN_AUTHOR)
}
