use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{ACCEPT_LANGUAGE, COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::debug;

use super::LinkedinApi;
use crate::error::LkError;
use crate::models::Credentials;

/// Root of the Voyager REST API
pub const VOYAGER_BASE_URL: &str = "https://www.linkedin.com/voyager/api";

const PROFILE_PATH: &str = "/me";
const CONVERSATIONS_PATH: &str = "/messaging/conversations?keyVersion=LEGACY_INBOX";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-AU,en-GB;q=0.9,en-US;q=0.8,en;q=0.7";

/// Blocking Voyager client authenticated with browser session cookies
pub struct VoyagerClient {
    http: Client,
    base_url: String,
}

impl VoyagerClient {
    /// Build a client for the public Voyager endpoint
    ///
    /// No request is made here; invalid cookies surface on the first call.
    pub fn new(credentials: &Credentials) -> Result<Self, LkError> {
        Self::with_base_url(credentials, VOYAGER_BASE_URL)
    }

    /// Build a client against a different API root
    pub fn with_base_url(credentials: &Credentials, base_url: &str) -> Result<Self, LkError> {
        Self::from_builder(Client::builder(), credentials, base_url)
    }

    fn from_builder(
        builder: ClientBuilder,
        credentials: &Credentials,
        base_url: &str,
    ) -> Result<Self, LkError> {
        let headers = session_headers(credentials)?;

        // A login redirect means the session is dead; report it instead of following
        let http = builder
            .default_headers(headers)
            .redirect(Policy::none())
            .build()
            .map_err(|e| LkError::ClientConstruction(e.to_string()))?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    fn get_json(&self, path: &str) -> Result<Value, LkError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "voyager request");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        debug!(%url, %status, "voyager response");

        if !status.is_success() {
            return Err(LkError::Upstream(format!("Request to {} failed: HTTP {}", path, status)));
        }

        response
            .json::<Value>()
            .map_err(|e| LkError::Upstream(format!("Invalid response from {}: {}", path, e)))
    }
}

impl LinkedinApi for VoyagerClient {
    fn fetch_current_user_profile(&self) -> Result<Value, LkError> {
        self.get_json(PROFILE_PATH)
    }

    fn fetch_conversations(&self) -> Result<Value, LkError> {
        self.get_json(CONVERSATIONS_PATH)
    }
}

/// Default headers carrying the session
///
/// Voyager expects the `JSESSIONID` cookie quoted and the same id, unquoted, echoed
/// in `csrf-token`.
pub(crate) fn session_headers(credentials: &Credentials) -> Result<HeaderMap, LkError> {
    let invalid = |what: &str, e: reqwest::header::InvalidHeaderValue| {
        LkError::ClientConstruction(format!("invalid {}: {}", what, e))
    };

    let mut cookie = HeaderValue::from_str(&format!(
        "li_at={}; JSESSIONID=\"{}\"",
        credentials.session_token, credentials.session_id
    ))
    .map_err(|e| invalid("session cookie", e))?;
    cookie.set_sensitive(true);

    let mut csrf_token =
        HeaderValue::from_str(&credentials.session_id).map_err(|e| invalid("session id", e))?;
    csrf_token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, cookie);
    headers.insert(HeaderName::from_static("csrf-token"), csrf_token);
    headers.insert(
        HeaderName::from_static("x-restli-protocol-version"),
        HeaderValue::from_static("2.0.0"),
    );
    headers.insert(HeaderName::from_static("x-li-lang"), HeaderValue::from_static("en_US"));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
    Ok(headers)
}
