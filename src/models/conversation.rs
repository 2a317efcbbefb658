use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    pub profile_id: String,
}

impl Participant {
    /// "First Last", as shown in text output
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    pub text: String,
    /// Upstream creation time in epoch milliseconds; `None` when absent, fractional
    /// or not a number
    pub created_at: Option<i64>,
    pub from_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub conversation_id: String,
    pub participants: Vec<Participant>,
    pub last_message: Option<LastMessage>,
    pub unread: bool,
}
