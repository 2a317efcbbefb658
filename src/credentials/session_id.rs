/// Prefix every `JSESSIONID` value carries once normalized
pub const SESSION_ID_PREFIX: &str = "ajax:";

/// Normalizes a raw `JSESSIONID` cookie value
///
/// Rules, applied in order:
/// 1. Strip any run of `"` and `'` characters from both ends.
/// 2. Prepend `ajax:` unless the result already starts with it.
///
/// The function is idempotent, so already-normalized values pass through unchanged.
///
/// # Examples
///
/// ```
/// use lk_cli::credentials::normalize_session_id;
///
/// assert_eq!(normalize_session_id("\"abc123\""), "ajax:abc123");
/// assert_eq!(normalize_session_id("ajax:abc123"), "ajax:abc123");
/// ```
pub fn normalize_session_id(raw: &str) -> String {
    let unquoted = strip_quotes(raw);
    if unquoted.starts_with(SESSION_ID_PREFIX) {
        unquoted.to_string()
    } else {
        format!("{}{}", SESSION_ID_PREFIX, unquoted)
    }
}

/// Removes surrounding single and double quotes
pub fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches(|c| c == '"' || c == '\'')
}

/// Removes surrounding double quotes only; the form persisted by `auth setup`
pub fn strip_double_quotes(raw: &str) -> &str {
    raw.trim_matches('"')
}
