//! Process-boundary error taxonomy
//!
//! Internal helpers (file storage, prompting) report failures as `anyhow::Error`
//! with context. Anything that can terminate a command is mapped into [`LkError`],
//! which knows how to render itself as the single JSON error document the CLI
//! prints before exiting with a non-zero status.

use serde_json::{Value, json};
use thiserror::Error;

/// Remediation hint shown when no usable credential pair was found
pub const CREDENTIALS_ACTION: &str =
    "Set LINKEDIN_LI_AT and LINKEDIN_JSESSIONID environment variables, or run: lk auth setup";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LkError {
    #[error("No LinkedIn credentials found")]
    CredentialsAbsent,

    #[error("{0}")]
    Upstream(String),

    #[error("Failed to create LinkedIn client: {0}")]
    ClientConstruction(String),

    #[error("Failed to save credentials: {0}")]
    Storage(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to write output: {0}")]
    Output(String),

    /// Failure of `auth status`, reported with its own document shape
    #[error("{0}")]
    NotAuthenticated(String),
}

impl LkError {
    /// Optional follow-up hint included as `action` in the error document
    pub fn action(&self) -> Option<&'static str> {
        match self {
            Self::CredentialsAbsent => Some(CREDENTIALS_ACTION),
            Self::InvalidInput(_) => Some("Run: lk auth setup"),
            _ => None,
        }
    }

    /// JSON document printed to stdout when a command fails
    pub fn to_document(&self) -> Value {
        match self {
            Self::NotAuthenticated(message) => {
                json!({ "authenticated": false, "error": message })
            }
            other => match other.action() {
                Some(action) => json!({ "error": other.to_string(), "action": action }),
                None => json!({ "error": other.to_string() }),
            },
        }
    }
}

impl From<std::io::Error> for LkError {
    fn from(e: std::io::Error) -> Self {
        LkError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for LkError {
    fn from(e: serde_json::Error) -> Self {
        LkError::Output(e.to_string())
    }
}

impl From<reqwest::Error> for LkError {
    fn from(e: reqwest::Error) -> Self {
        LkError::Upstream(e.to_string())
    }
}
