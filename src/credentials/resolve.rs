use std::path::Path;

use tracing::debug;

use super::session_id::normalize_session_id;
use super::store::load_stored;
use crate::models::Credentials;
use crate::utils::{SESSION_ID_ENV_VAR, SESSION_TOKEN_ENV_VAR, get_credentials_path, read_env_value};

/// Resolve credentials from the process environment and the default credential file
///
/// Returns `None` when no complete pair can be assembled; see [`resolve_from`].
pub fn resolve() -> Option<Credentials> {
    let credentials_path = match get_credentials_path() {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("credential file location unavailable: {:#}", e);
            None
        }
    };

    resolve_from(read_env_value, credentials_path.as_deref())
}

/// Resolve credentials from an injected environment lookup and credential file
///
/// `lookup` is called with the environment variable names. The file at
/// `credentials_path` is read only when at least one of the two values is missing,
/// and supplies only the missing value(s). Empty strings count as missing.
///
/// Failures reading the file are swallowed (logged at debug level) and behave
/// exactly like an absent file.
///
/// # Examples
///
/// ```
/// use lk_cli::credentials::resolve_from;
///
/// let creds = resolve_from(
///     |name| match name {
///         "LINKEDIN_LI_AT" => Some("AQEDAR".to_string()),
///         "LINKEDIN_JSESSIONID" => Some("\"123\"".to_string()),
///         _ => None,
///     },
///     None,
/// )
/// .unwrap();
/// assert_eq!(creds.session_id, "ajax:123");
/// ```
pub fn resolve_from<F>(lookup: F, credentials_path: Option<&Path>) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let mut session_token = non_empty(lookup(SESSION_TOKEN_ENV_VAR));
    let mut session_id = non_empty(lookup(SESSION_ID_ENV_VAR));

    if (session_token.is_none() || session_id.is_none())
        && let Some(path) = credentials_path
    {
        match load_stored(path) {
            Ok(Some(stored)) => {
                session_token = session_token.or_else(|| non_empty(stored.li_at));
                session_id = session_id.or_else(|| non_empty(stored.jsessionid));
            }
            Ok(None) => debug!(path = %path.display(), "no credentials file"),
            Err(e) => debug!("ignoring unreadable credentials file: {:#}", e),
        }
    }

    let session_token = session_token?;
    let session_id = normalize_session_id(&session_id?);
    Some(Credentials { session_token, session_id })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
