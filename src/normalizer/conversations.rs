use serde_json::Value;

use super::union::{
    MESSAGE_EVENT, MESSAGING_MEMBER, array_or_empty, lookup, string_or_default, union_member,
};
use crate::models::{Conversation, LastMessage, Participant};

static NULL: Value = Value::Null;

/// Normalize a `GET /messaging/conversations` payload
///
/// Produces one [`Conversation`] per entry of `elements`, in upstream order.
/// `authenticated_user_id` is the public identifier of the logged-in user, used to
/// decide `fromMe` for every conversation; callers resolve it once per listing.
///
/// A payload without an `elements` array yields an empty list.
///
/// # Examples
///
/// ```
/// use lk_cli::normalizer::normalize_conversations;
/// use serde_json::json;
///
/// let raw = json!({ "elements": [{ "entityUrn": "urn:li:conversation:abc", "unreadCount": 2 }] });
/// let conversations = normalize_conversations(&raw, "me");
/// assert_eq!(conversations[0].conversation_id, "abc");
/// assert!(conversations[0].unread);
/// assert!(conversations[0].last_message.is_none());
/// ```
pub fn normalize_conversations(raw: &Value, authenticated_user_id: &str) -> Vec<Conversation> {
    array_or_empty(raw.get("elements"))
        .iter()
        .map(|conversation| normalize_conversation(conversation, authenticated_user_id))
        .collect()
}

/// Normalize a single conversation element
pub fn normalize_conversation(raw: &Value, authenticated_user_id: &str) -> Conversation {
    let participants =
        array_or_empty(raw.get("participants")).iter().map(normalize_participant).collect();

    let entity_urn = raw.get("entityUrn").and_then(Value::as_str).unwrap_or_default();

    Conversation {
        conversation_id: conversation_id_from_urn(entity_urn),
        participants,
        last_message: normalize_last_message(raw, authenticated_user_id),
        unread: raw.get("unreadCount").and_then(Value::as_f64).is_some_and(|count| count > 0.0),
    }
}

/// Trailing segment of a colon-delimited entity URN
///
/// `urn:li:conversation:abc` becomes `abc`; a string without colons is returned whole.
pub fn conversation_id_from_urn(urn: &str) -> String {
    urn.rsplit(':').next().unwrap_or(urn).to_string()
}

fn normalize_participant(entry: &Value) -> Participant {
    let Some(mini_profile) = union_member(entry, MESSAGING_MEMBER).map(mini_profile_of) else {
        return Participant::default();
    };

    Participant {
        first_name: string_or_default(mini_profile.get("firstName")),
        last_name: string_or_default(mini_profile.get("lastName")),
        profile_id: string_or_default(mini_profile.get("publicIdentifier")),
    }
}

/// Events are ordered most recent first, so the first one is the last message
fn normalize_last_message(conversation: &Value, authenticated_user_id: &str) -> Option<LastMessage> {
    let event = array_or_empty(conversation.get("events")).first()?;

    let text = event
        .get("eventContent")
        .and_then(|content| union_member(content, MESSAGE_EVENT))
        .and_then(|message| lookup(message, &["attributedBody", "text"]));

    let sender_id = event
        .get("from")
        .and_then(|from| union_member(from, MESSAGING_MEMBER))
        .map(mini_profile_of)
        .and_then(|mini_profile| mini_profile.get("publicIdentifier"));

    Some(LastMessage {
        text: string_or_default(text),
        created_at: event.get("createdAt").and_then(epoch_millis),
        from_me: string_or_default(sender_id) == authenticated_user_id,
    })
}

/// Integer milliseconds; floats are accepted only when they carry no fraction
fn epoch_millis(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|ms| ms.is_finite() && ms.fract() == 0.0 && ms.abs() < i64::MAX as f64)
            .map(|ms| ms as i64)
    })
}

fn mini_profile_of(member: &Value) -> &Value {
    member.get("miniProfile").unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn member(first: &str, last: &str, id: &str) -> Value {
        json!({
            MESSAGING_MEMBER: {
                "miniProfile": { "firstName": first, "lastName": last, "publicIdentifier": id }
            }
        })
    }

    fn message_event(text: &str, sender: &str, created_at: i64) -> Value {
        json!({
            "createdAt": created_at,
            "from": member("Sender", "Person", sender),
            "eventContent": { MESSAGE_EVENT: { "attributedBody": { "text": text } } }
        })
    }

    #[test]
    fn test_conversation_id_from_urn() {
        assert_eq!(conversation_id_from_urn("urn:li:conversation:abc"), "abc");
        assert_eq!(conversation_id_from_urn("xyz"), "xyz");
        assert_eq!(conversation_id_from_urn(""), "");
        assert_eq!(conversation_id_from_urn("urn:li:conversation:"), "");
    }

    #[test]
    fn test_full_conversation() {
        let raw = json!({
            "entityUrn": "urn:li:fs_conversation:2-ZTQ5",
            "unreadCount": 3,
            "participants": [member("Ada", "Lovelace", "ada-l")],
            "events": [message_event("Are you free on Tuesday?", "ada-l", 1700000000000i64)]
        });

        let conversation = normalize_conversation(&raw, "me-123");

        assert_eq!(conversation.conversation_id, "2-ZTQ5");
        assert!(conversation.unread);
        assert_eq!(
            conversation.participants,
            vec![Participant {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                profile_id: "ada-l".to_string(),
            }]
        );
        let last = conversation.last_message.unwrap();
        assert_eq!(last.text, "Are you free on Tuesday?");
        assert_eq!(last.created_at, Some(1700000000000));
        assert!(!last.from_me);
    }

    #[test]
    fn test_participant_without_member_tag_is_kept_empty() {
        let raw = json!({
            "participants": [
                { "com.linkedin.voyager.messaging.UnknownMember": {} },
                member("Grace", "Hopper", "ghopper")
            ]
        });

        let conversation = normalize_conversation(&raw, "me");
        assert_eq!(conversation.participants.len(), 2);
        assert_eq!(conversation.participants[0], Participant::default());
        assert_eq!(conversation.participants[1].first_name, "Grace");
    }

    #[test]
    fn test_participant_member_without_mini_profile() {
        let raw = json!({ "participants": [{ MESSAGING_MEMBER: {} }] });
        let conversation = normalize_conversation(&raw, "me");
        assert_eq!(conversation.participants, vec![Participant::default()]);
    }

    #[test]
    fn test_participants_keep_order_and_duplicates() {
        let raw = json!({
            "participants": [member("B", "B", "b"), member("A", "A", "a"), member("B", "B", "b")]
        });
        let ids: Vec<String> = normalize_conversation(&raw, "me")
            .participants
            .into_iter()
            .map(|p| p.profile_id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_empty_events_yield_no_last_message() {
        let raw = json!({ "entityUrn": "urn:li:conversation:1", "events": [] });
        assert!(normalize_conversation(&raw, "me").last_message.is_none());
    }

    #[test]
    fn test_first_event_is_last_message() {
        let raw = json!({
            "events": [message_event("newest", "x", 2), message_event("older", "y", 1)]
        });
        let last = normalize_conversation(&raw, "me").last_message.unwrap();
        assert_eq!(last.text, "newest");
        assert_eq!(last.created_at, Some(2));
    }

    #[test]
    fn test_long_text_is_not_truncated() {
        let long_text = "word ".repeat(40);
        let raw = json!({ "events": [message_event(&long_text, "x", 1)] });
        let last = normalize_conversation(&raw, "me").last_message.unwrap();
        assert_eq!(last.text, long_text);
    }

    #[test]
    fn test_non_message_event_has_empty_text() {
        let raw = json!({
            "events": [{
                "createdAt": 5,
                "eventContent": { "com.linkedin.voyager.messaging.event.ParticipantChangeEvent": {} }
            }]
        });
        let last = normalize_conversation(&raw, "me").last_message.unwrap();
        assert_eq!(last.text, "");
        assert_eq!(last.created_at, Some(5));
    }

    #[test]
    fn test_from_me_matches_authenticated_user() {
        let raw = json!({ "events": [message_event("hi", "me-123", 1)] });
        assert!(normalize_conversation(&raw, "me-123").last_message.unwrap().from_me);
        assert!(!normalize_conversation(&raw, "someone-else").last_message.unwrap().from_me);
    }

    #[test]
    fn test_from_me_compares_exact_strings() {
        let raw = json!({ "events": [message_event("hi", "Me-123", 1)] });
        assert!(!normalize_conversation(&raw, "me-123").last_message.unwrap().from_me);
    }

    #[test]
    fn test_unread_derived_from_count() {
        let unread = |raw: Value| normalize_conversation(&raw, "me").unread;
        assert!(!unread(json!({})));
        assert!(!unread(json!({ "unreadCount": 0 })));
        assert!(unread(json!({ "unreadCount": 1 })));
        assert!(!unread(json!({ "unreadCount": null })));
        // A boolean is not a count
        assert!(!unread(json!({ "unreadCount": true })));
        assert!(!unread(json!({ "unread": true })));
    }

    #[test]
    fn test_created_at_accepts_whole_float() {
        let created_at = |ts: Value| {
            let raw = json!({ "events": [{ "createdAt": ts }] });
            normalize_conversation(&raw, "me").last_message.unwrap().created_at
        };
        assert_eq!(created_at(json!(1.7e12)), Some(1_700_000_000_000));
        assert_eq!(created_at(json!(1.5)), None);
        assert_eq!(created_at(json!("1700000000000")), None);
    }

    #[test]
    fn test_missing_created_at_is_none() {
        let raw = json!({ "events": [{ "eventContent": {} }] });
        let last = normalize_conversation(&raw, "me").last_message.unwrap();
        assert_eq!(last.created_at, None);
    }

    #[test]
    fn test_elements_order_preserved() {
        let raw = json!({
            "elements": [
                { "entityUrn": "urn:li:conversation:3" },
                { "entityUrn": "urn:li:conversation:1" },
                { "entityUrn": "urn:li:conversation:2" }
            ]
        });
        let ids: Vec<String> =
            normalize_conversations(&raw, "me").into_iter().map(|c| c.conversation_id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_payload_without_elements() {
        assert!(normalize_conversations(&json!({}), "me").is_empty());
        assert!(normalize_conversations(&json!({ "elements": "oops" }), "me").is_empty());
        assert!(normalize_conversations(&Value::Null, "me").is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let raw = json!({
            "entityUrn": "urn:li:conversation:abc",
            "participants": [member("Ada", "Lovelace", "ada-l")],
            "events": [message_event("hello", "me", 42)],
            "unreadCount": 0
        });
        let value = serde_json::to_value(normalize_conversation(&raw, "me")).unwrap();
        assert_eq!(
            value,
            json!({
                "conversationId": "abc",
                "participants": [{ "firstName": "Ada", "lastName": "Lovelace", "profileId": "ada-l" }],
                "lastMessage": { "text": "hello", "createdAt": 42, "fromMe": true },
                "unread": false
            })
        );
    }
}
