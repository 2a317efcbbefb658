use std::fmt;

/// A resolved, normalized session cookie pair
///
/// Only ever constructed complete: a partial pair is represented as `None` by the
/// resolver, never as a `Credentials` with an empty field.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Value of the `li_at` cookie
    pub session_token: String,
    /// Value of the `JSESSIONID` cookie, always `ajax:`-prefixed
    pub session_id: String,
}

// Keep the token out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("session_token", &"<redacted>")
            .field("session_id", &self.session_id)
            .finish()
    }
}
