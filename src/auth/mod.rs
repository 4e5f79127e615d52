mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use selectors::{select_current_username, select_is_logged_in};
pub use state::AuthState;
