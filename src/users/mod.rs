mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use selectors::{select_all_users, select_user_by_id, select_user_name, UNKNOWN_AUTHOR};
pub use state::UsersState;
