//! Upstream access to LinkedIn's Voyager API
//!
//! Commands depend on the [`LinkedinApi`] trait rather than on the HTTP client, so
//! the command layer can be exercised with canned payloads. [`VoyagerClient`] is
//! the production implementation.

pub mod voyager;

use serde_json::Value;

use crate::error::LkError;

pub use voyager::{VOYAGER_BASE_URL, VoyagerClient};

/// The two read operations the CLI needs from upstream
///
/// Both return the raw JSON document; shaping it is the normalizer's job. Failures
/// (transport, non-success status, undecodable body) are [`LkError::Upstream`].
pub trait LinkedinApi {
    /// Profile of the authenticated member (`GET /me`)
    fn fetch_current_user_profile(&self) -> Result<Value, LkError>;

    /// Conversation inbox (`GET /messaging/conversations`)
    fn fetch_conversations(&self) -> Result<Value, LkError>;
}
