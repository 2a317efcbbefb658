//! lk - LinkedIn profile and inbox access from the command line
//!
//! This library backs the `lk` binary. It authenticates with session cookies
//! captured from a logged-in browser and provides:
//!
//! - Credential resolution from the environment and `~/.clawdbot/linkedin-monitor/credentials.json`
//! - A blocking client for the two Voyager endpoints the CLI reads
//! - Normalization of raw conversation payloads into a stable, minimal schema
//! - Text and JSON rendering for the `profile`, `message` and `auth` commands
//!
//! # Example
//!
//! ```
//! use lk_cli::normalize_conversations;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "elements": [{
//!         "entityUrn": "urn:li:conversation:2-abc",
//!         "unreadCount": 1,
//!         "participants": [],
//!         "events": []
//!     }]
//! });
//! let conversations = normalize_conversations(&raw, "my-public-id");
//! assert_eq!(conversations[0].conversation_id, "2-abc");
//! assert!(conversations[0].unread);
//! ```

pub mod cli;
pub mod client;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod utils;

// Re-export commonly used types
pub use client::{LinkedinApi, VoyagerClient};
pub use credentials::{normalize_session_id, persist, resolve};
pub use error::LkError;
pub use models::{Conversation, Credentials, LastMessage, Participant, ProfileSummary};
pub use normalizer::{normalize_conversations, normalize_profile_summary};
pub use utils::format_path_with_tilde;
