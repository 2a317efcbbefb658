//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const MESSAGING_MEMBER: &str = "com.linkedin.voyager.messaging.MessagingMember";
pub const MESSAGE_EVENT: &str = "com.linkedin.voyager.messaging.event.MessageEvent";

/// Builder for a temporary home directory, optionally with a credential file
pub struct HomeDirBuilder {
    temp_dir: TempDir,
}

impl HomeDirBuilder {
    /// Create a new builder with an empty home directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path of the credential file inside this home directory
    pub fn credentials_path(&self) -> PathBuf {
        credentials_path_in(self.temp_dir.path())
    }

    /// Write the credential file with the given raw content
    pub fn with_credentials_file(self, content: &str) -> Self {
        let path = self.credentials_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create credentials dir");
        fs::write(path, content).expect("Failed to write credentials file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `~/.clawdbot/linkedin-monitor/credentials.json` relative to `home`
pub fn credentials_path_in(home: &Path) -> PathBuf {
    home.join(".clawdbot").join("linkedin-monitor").join("credentials.json")
}

/// Builder for one raw Voyager conversation element
pub struct ConversationBuilder {
    entity_urn: Option<String>,
    unread_count: Option<Value>,
    participants: Vec<Value>,
    events: Vec<Value>,
}

impl ConversationBuilder {
    /// Create a conversation with the given entity URN and nothing else
    pub fn new(entity_urn: &str) -> Self {
        Self {
            entity_urn: Some(entity_urn.to_string()),
            unread_count: None,
            participants: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create a conversation without an `entityUrn`
    pub fn without_urn() -> Self {
        Self { entity_urn: None, unread_count: None, participants: Vec::new(), events: Vec::new() }
    }

    /// Set `unreadCount`
    pub fn unread_count(mut self, count: i64) -> Self {
        self.unread_count = Some(json!(count));
        self
    }

    /// Add a participant wrapped in the messaging-member union
    pub fn participant(mut self, first: &str, last: &str, public_id: &str) -> Self {
        self.participants.push(member(first, last, public_id));
        self
    }

    /// Add a participant entry with an unexpected union tag
    pub fn untagged_participant(mut self) -> Self {
        self.participants.push(json!({ "com.linkedin.voyager.messaging.GroupMember": {} }));
        self
    }

    /// Add a message event (events are listed most recent first)
    pub fn message(mut self, text: &str, sender_public_id: &str, created_at: i64) -> Self {
        self.events.push(json!({
            "createdAt": created_at,
            "from": member("Sender", "Name", sender_public_id),
            "eventContent": { MESSAGE_EVENT: { "attributedBody": { "text": text } } }
        }));
        self
    }

    /// Convert to the raw JSON element
    pub fn to_json(&self) -> Value {
        let mut conversation = json!({
            "participants": self.participants,
            "events": self.events,
        });
        if let Some(urn) = &self.entity_urn {
            conversation["entityUrn"] = json!(urn);
        }
        if let Some(count) = &self.unread_count {
            conversation["unreadCount"] = count.clone();
        }
        conversation
    }
}

/// Wrap conversations in the `GET /messaging/conversations` envelope
pub fn inbox(conversations: &[ConversationBuilder]) -> Value {
    let elements: Vec<Value> = conversations.iter().map(ConversationBuilder::to_json).collect();
    json!({ "elements": elements, "paging": { "start": 0, "count": 20 } })
}

fn member(first: &str, last: &str, public_id: &str) -> Value {
    json!({
        MESSAGING_MEMBER: {
            "miniProfile": {
                "firstName": first,
                "lastName": last,
                "publicIdentifier": public_id,
                "entityUrn": format!("urn:li:fs_miniProfile:{}", public_id)
            }
        }
    })
}
