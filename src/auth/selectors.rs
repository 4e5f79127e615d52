use crate::store::Snapshot;

pub fn select_current_username(snapshot: &Snapshot) -> Option<&str> {
    snapshot.auth.current_username.as_deref()
}

pub fn select_is_logged_in(snapshot: &Snapshot) -> bool {
    snapshot.auth.is_logged_in()
}
