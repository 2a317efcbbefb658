//! Credential file load/save with atomic writes

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::session_id::strip_double_quotes;
use crate::utils::get_credentials_path;

/// On-disk layout of the credential file
///
/// Every key is optional when reading; a missing key reads as an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(default)]
    pub li_at: Option<String>,
    #[serde(default)]
    pub jsessionid: Option<String>,
    /// ISO-8601 time of the last `auth setup`
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Load the credential file at `path`
///
/// Returns `Ok(None)` when the file does not exist. Unreadable files and malformed
/// JSON are errors here; the resolver decides to treat them as absent.
pub fn load_stored(path: &Path) -> Result<Option<StoredCredentials>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read credentials file: {}", path.display()));
        }
    };

    let stored = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse credentials file: {}", path.display()))?;
    Ok(Some(stored))
}

/// Persist a credential pair to the default credential file and return its path
pub fn persist(session_token: &str, session_id: &str) -> Result<PathBuf> {
    let path = get_credentials_path()?;
    persist_to(&path, session_token, session_id)?;
    Ok(path)
}

/// Persist a credential pair to `path`, replacing any existing file
///
/// The token is written as given. The session id only loses surrounding double
/// quotes; the `ajax:` prefix is added at resolve time, not here.
pub fn persist_to(path: &Path, session_token: &str, session_id: &str) -> Result<()> {
    let stored = StoredCredentials {
        li_at: Some(session_token.to_string()),
        jsessionid: Some(strip_double_quotes(session_id).to_string()),
        updated_at: Some(Local::now().to_rfc3339()),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create credentials directory: {}", parent.display())
        })?;
    }

    let json = serde_json::to_string_pretty(&stored).context("Failed to serialize credentials")?;

    // Write atomically (temp file + rename)
    let temp_path = path.with_extension("json.tmp");
    let written = write_private(&temp_path, json.as_bytes()).and_then(|()| {
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace credentials file: {}", path.display()))
    });
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written?;

    debug!(path = %path.display(), "saved credentials");
    Ok(())
}

fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = open_private(path)
        .with_context(|| format!("Failed to create temp file: {}", path.display()))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file: {}", path.display()))?;
    file.flush().context("Failed to flush credentials temp file")?;
    Ok(())
}

/// Create (or truncate) a file readable only by the owner
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}
