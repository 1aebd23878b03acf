//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL};
use crate::errors::{DineroError, Result};
use crate::types::EmailSettings;

/// Credentials and defaults for a single Dinero organization.
///
/// The four credential fields are mandatory; everything else falls back to
/// the production endpoints and a 10 second request timeout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DineroConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub organization_id: String,

    /// Default settings merged under every `send_invoice_email` call.
    #[serde(default)]
    pub email_settings: EmailSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl DineroConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_key: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_key: api_key.into(),
            organization_id: organization_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_email_settings(mut self, settings: EmailSettings) -> Self {
        self.email_settings = settings;
        self
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Check that every mandatory credential is present and non-empty.
    ///
    /// # Errors
    /// Returns `DineroError::MissingConfig` naming the first missing key.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("api_key", &self.api_key),
            ("organization_id", &self.organization_id),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(DineroError::MissingConfig(key.to_string()));
            }
        }

        Ok(())
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL).trim_end_matches('/')
    }

    pub fn token_url(&self) -> &str {
        self.token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
