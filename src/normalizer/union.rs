use serde_json::Value;

/// Union tag wrapping a conversation participant or message sender
pub const MESSAGING_MEMBER: &str = "com.linkedin.voyager.messaging.MessagingMember";

/// Union tag wrapping the content of a plain message event
pub const MESSAGE_EVENT: &str = "com.linkedin.voyager.messaging.event.MessageEvent";

/// Look up the member of a tagged-union object by its type tag
///
/// Returns `None` when `value` is not an object or does not carry `tag`; callers
/// treat that as "union absent" and default everything beneath it.
pub fn union_member<'a>(value: &'a Value, tag: &str) -> Option<&'a Value> {
    value.get(tag).filter(|member| !member.is_null())
}

/// Follow a chain of object keys, stopping at the first missing step
pub fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(*key))
}

/// The string at `value`, or `""` when absent or not a string
pub fn string_or_default(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// The array at `value`, or an empty slice when absent or not an array
pub fn array_or_empty(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}
