//! Session credential resolution and storage
//!
//! # Precedence
//!
//! Credentials come from two sources, consulted per value:
//!
//! - **Environment**: `LINKEDIN_LI_AT` and `LINKEDIN_JSESSIONID` always win when set.
//! - **Credential file**: `~/.clawdbot/linkedin-monitor/credentials.json` fills in
//!   whichever value the environment lacks (token from one source and id from the
//!   other is a supported combination).
//!
//! A pair is usable only when both values are present and non-empty. Resolution
//! never fails: an unreadable or malformed file counts as an absent file, and
//! "no credentials" is reported as `None` for the caller to turn into an error.
//!
//! The session id is normalized to its `ajax:`-prefixed form on the way out of the
//! resolver. The file keeps the id as entered (only surrounding double quotes
//! removed), so normalization rules can change without rewriting stored files.

pub mod resolve;
pub mod session_id;
pub mod store;

pub use resolve::{resolve, resolve_from};
pub use session_id::{SESSION_ID_PREFIX, normalize_session_id};
pub use store::{StoredCredentials, load_stored, persist, persist_to};
