//! Data models for the `lk` command-line client.
//!
//! This module defines the stable output schema and the credential value:
//!
//! - [`Conversation`] - Normalized conversation with its participants and last message
//! - [`Participant`] - Name and public identifier of a conversation member
//! - [`LastMessage`] - Most recent message event of a conversation
//! - [`ProfileSummary`] - Display name and headline used for text output
//! - [`Credentials`] - Resolved session cookie pair
//!
//! Output models serialize with camelCase keys; raw upstream payloads stay
//! `serde_json::Value` until the normalizer projects them into these types.

pub mod conversation;
pub mod credentials;
pub mod profile;

pub use conversation::{Conversation, LastMessage, Participant};
pub use credentials::Credentials;
pub use profile::ProfileSummary;
