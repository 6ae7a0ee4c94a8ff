use std::env;

use url::Url;

use crate::error::SessionError;

/// Production backend origin, used when `PREP_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://prepnovate-backend.onrender.com";

/// Connection context for the exam-prep backend: where to send requests and
/// which bearer token to present.
///
/// The session is an explicit value handed to whatever issues requests;
/// there is no process-global token.
#[derive(Clone, Debug)]
pub struct ApiSession {
    base_url: Url,
    token: String,
}

impl ApiSession {
    /// Creates a session for the given origin and bearer token.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the URL does not parse or the token is
    /// empty/whitespace.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self {
            base_url: Url::parse(base_url)?,
            token,
        })
    }

    /// Builds a session from `PREP_API_TOKEN` and, optionally,
    /// `PREP_API_BASE_URL`. Returns `None` when no usable token is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let token = env::var("PREP_API_TOKEN").ok()?;
        if token.trim().is_empty() {
            return None;
        }
        let base_url = env::var("PREP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&base_url, token).ok()
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}
