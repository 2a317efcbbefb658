//! Command implementations
//!
//! Each action writes its successful result to `out` and returns an [`LkError`] on
//! failure; printing the error document and choosing the exit status is left to
//! [`super::commands::run`]. Actions never print partial results: output is
//! written only after every upstream call has succeeded.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::render::{conversation_line, profile_lines};
use crate::client::LinkedinApi;
use crate::credentials::persist_to;
use crate::error::LkError;
use crate::normalizer::{normalize_conversations, normalize_profile_summary, public_identifier};
use crate::utils::format_path_with_tilde;

const SETUP_INSTRUCTIONS: &str = "\
LinkedIn Authentication Setup
========================================

To get your credentials:
1. Open LinkedIn in Chrome
2. Press F12 to open DevTools
3. Go to Application > Cookies > linkedin.com
4. Copy the values for 'li_at' and 'JSESSIONID'
";

/// Options of `message list`
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageListOptions {
    pub json: bool,
    pub unread_only: bool,
}

/// Cookie values given on the command line; missing ones are prompted for
#[derive(Debug, Clone, Default)]
pub struct SetupValues {
    pub li_at: Option<String>,
    pub jsessionid: Option<String>,
}

/// Pretty-print a JSON document followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), LkError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `profile me`: the raw profile in JSON mode, name and headline otherwise
pub fn profile_me<A: LinkedinApi, W: Write>(api: &A, json: bool, out: &mut W) -> Result<(), LkError> {
    let profile = api.fetch_current_user_profile()?;

    if json {
        return write_json(out, &profile);
    }

    for line in profile_lines(&normalize_profile_summary(&profile)) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// `message list`: normalized conversations, optionally unread only
///
/// The authenticated user's identifier is fetched once, before the inbox, and
/// shared by every conversation's `fromMe` computation.
pub fn message_list<A: LinkedinApi, W: Write>(
    api: &A,
    options: MessageListOptions,
    out: &mut W,
) -> Result<(), LkError> {
    let me = public_identifier(&api.fetch_current_user_profile()?);
    let raw = api.fetch_conversations()?;

    let mut conversations = normalize_conversations(&raw, &me);
    debug!(count = conversations.len(), "normalized conversations");

    if options.unread_only {
        conversations.retain(|conversation| conversation.unread);
    }

    if options.json {
        return write_json(out, &conversations);
    }

    for conversation in &conversations {
        writeln!(out, "{}", conversation_line(conversation))?;
    }
    Ok(())
}

/// `auth status`: verify the resolved session by fetching the profile
///
/// `api` is `None` when no credentials could be resolved.
pub fn auth_status<A: LinkedinApi, W: Write>(api: Option<&A>, out: &mut W) -> Result<(), LkError> {
    let api = api.ok_or_else(|| LkError::NotAuthenticated("No credentials found".to_string()))?;

    let profile = api
        .fetch_current_user_profile()
        .map_err(|e| LkError::NotAuthenticated(e.to_string()))?;

    let summary = normalize_profile_summary(&profile);
    write_json(
        out,
        &json!({
            "authenticated": true,
            "user": summary.display_name,
            "id": public_identifier(&profile),
        }),
    )
}

/// `auth setup` / `auth login`: collect both cookie values and save them to `path`
///
/// Values passed as flags are used as-is; the rest are prompted for on `input`.
/// Instructions are shown only when at least one prompt is needed.
pub fn auth_setup<R: BufRead, W: Write>(
    values: SetupValues,
    path: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<(), LkError> {
    if values.li_at.is_none() || values.jsessionid.is_none() {
        writeln!(out, "{}", SETUP_INSTRUCTIONS)?;
    }

    let li_at = match values.li_at {
        Some(value) => value.trim().to_string(),
        None => prompt(input, out, "Enter li_at cookie value: ")?,
    };
    let jsessionid = match values.jsessionid {
        Some(value) => value.trim().to_string(),
        None => prompt(input, out, "Enter JSESSIONID cookie value: ")?,
    };

    if li_at.is_empty() {
        return Err(LkError::InvalidInput("li_at cookie value cannot be empty".to_string()));
    }
    if jsessionid.is_empty() {
        return Err(LkError::InvalidInput("JSESSIONID cookie value cannot be empty".to_string()));
    }

    persist_to(path, &li_at, &jsessionid).map_err(|e| LkError::Storage(format!("{:#}", e)))?;

    writeln!(out)?;
    writeln!(out, "Credentials saved to: {}", format_path_with_tilde(path))?;
    writeln!(out, "Run 'lk profile me' to test authentication")?;
    Ok(())
}

/// Print `label`, read one line, and return it trimmed (empty at end of input)
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String, LkError> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| LkError::InvalidInput(e.to_string()))?;
    Ok(line.trim().to_string())
}
