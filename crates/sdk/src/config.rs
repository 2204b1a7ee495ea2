//! Configuration types for the Dokploy SDK.

use crate::error::DokployError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for the Dokploy client.
///
/// Built once at startup and shared read-only by the transport and every
/// tool handler.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Dokploy instance, without the `/api` suffix.
    pub base_url: Url,
    /// API credential sent on every request.
    pub api_key: String,
    /// Log every request and every failure.
    pub debug: bool,
    /// Which header carries the credential.
    pub auth_scheme: AuthScheme,
    /// Verb used by application and database deletion paths.
    pub removal_verb: RemovalVerb,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and credential.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            debug: false,
            auth_scheme: AuthScheme::default(),
            removal_verb: RemovalVerb::default(),
            timeout: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("debug", &self.debug)
            .field("auth_scheme", &self.auth_scheme)
            .field("removal_verb", &self.removal_verb)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Header scheme used to carry the credential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthScheme {
    /// `x-api-key: <key>`
    #[default]
    ApiKey,
    /// `Authorization: Bearer <key>`
    Bearer,
}

impl FromStr for AuthScheme {
    type Err = DokployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api-key" | "apikey" | "x-api-key" => Ok(Self::ApiKey),
            "bearer" => Ok(Self::Bearer),
            other => Err(DokployError::Config(format!(
                "Unknown auth scheme '{}', expected 'api-key' or 'bearer'",
                other
            ))),
        }
    }
}

/// Verb used for deleting applications and databases.
///
/// Dokploy releases disagree on `application.delete` versus
/// `application.remove`; pin whichever the target instance serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalVerb {
    #[default]
    Delete,
    Remove,
}

impl RemovalVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Remove => "remove",
        }
    }
}

impl FromStr for RemovalVerb {
    type Err = DokployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(Self::Delete),
            "remove" => Ok(Self::Remove),
            other => Err(DokployError::Config(format!(
                "Unknown removal verb '{}', expected 'delete' or 'remove'",
                other
            ))),
        }
    }
}
