//! Session-scoped credential handling
//!
//! The API key is entered once per session (environment, `.env`, or explicit
//! input) and then handed to the editor as a plain value. It is never written
//! back to disk.

use crate::{Error, Result};
use std::fmt;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Opaque Gemini API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Credential store for one editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    api_key: Option<ApiKey>,
}

impl Session {
    /// Empty or whitespace-only keys are treated as absent.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(ApiKey);
        Self { api_key }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(Some(api_key.into()))
    }

    /// Load the key from `GEMINI_API_KEY`, reading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let session = Self::new(std::env::var(API_KEY_VAR).ok());
        if session.api_key.is_none() {
            tracing::warn!("{} is not set; generation calls will fail", API_KEY_VAR);
        }
        session
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key(&self) -> Result<&ApiKey> {
        self.api_key.as_ref().ok_or(Error::MissingCredential)
    }
}
