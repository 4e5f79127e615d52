/// Intents owned by the auth slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    /// Not validated against the user roster; callers check with selectors first.
    UserLoggedIn { username: String },
    /// Also observed by the posts slice, which drops the feed.
    UserLoggedOut,
}
