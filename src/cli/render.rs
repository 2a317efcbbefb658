use crate::models::{Conversation, Participant, ProfileSummary};
use crate::utils::{PREVIEW_CHARS, sanitize_for_terminal, truncate_with_ellipsis};

const UNREAD_MARKER: char = '●';
const READ_MARKER: char = ' ';
const UNKNOWN_PARTICIPANT: &str = "Unknown";

/// One `message list` line: `"{marker} {name}: {preview}"`
pub fn conversation_line(conversation: &Conversation) -> String {
    let marker = if conversation.unread { UNREAD_MARKER } else { READ_MARKER };

    let name = conversation
        .participants
        .first()
        .map(Participant::display_name)
        .unwrap_or_else(|| UNKNOWN_PARTICIPANT.to_string());

    let preview = conversation
        .last_message
        .as_ref()
        .map(|message| truncate_with_ellipsis(&sanitize_for_terminal(&message.text), PREVIEW_CHARS))
        .unwrap_or_default();

    format!("{} {}: {}", marker, sanitize_for_terminal(&name), preview)
}

/// The two `profile me` lines: name, then headline
pub fn profile_lines(summary: &ProfileSummary) -> [String; 2] {
    [sanitize_for_terminal(&summary.display_name), sanitize_for_terminal(&summary.headline)]
}
