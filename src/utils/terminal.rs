//! Text-mode output helpers
//!
//! Message bodies and names come from other LinkedIn users, so anything printed in
//! text mode passes through [`sanitize_for_terminal`] first. JSON mode prints the
//! values unchanged (serde_json escapes control characters itself).

/// Number of characters of a message shown in `message list` text output
pub const PREVIEW_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// Strips ANSI escape sequences and control characters
///
/// Removes CSI sequences (`ESC [ ... letter`) and every other control character
/// except tab. Newlines and carriage returns become spaces so a single message
/// stays on a single output line.
///
/// # Examples
///
/// ```
/// use lk_cli::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mhi\x1b[0m\nthere"), "hi there");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Skip parameters up to and including the final letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        match ch {
            '\n' | '\r' => result.push(' '),
            '\t' => result.push(ch),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}

/// Cuts `text` to `max_chars` characters, appending `...` when anything was cut
///
/// Counts Unicode scalar values, never splitting a character.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
