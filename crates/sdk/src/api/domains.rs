//! Domains API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::applications::ApplicationIdRequest;

/// Domains API for routing hostnames to applications.
pub struct DomainsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> DomainsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List the domains attached to an application.
    pub async fn list(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::DOMAIN_BY_APPLICATION, request)
            .await
    }

    /// Attach a domain to an application.
    pub async fn create(&self, request: &CreateDomainRequest) -> DokployResult<Value> {
        self.client.http.post(paths::DOMAIN_CREATE, request).await
    }

    /// Detach a domain.
    pub async fn remove(&self, request: &DomainIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::DOMAIN_DELETE, request).await
    }

    /// Generate a free `traefik.me` hostname for an app.
    pub async fn generate(&self, request: &GenerateDomainRequest) -> DokployResult<Value> {
        self.client.http.post(paths::DOMAIN_GENERATE, request).await
    }
}

/// Certificate provisioning for a domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    #[default]
    None,
    Letsencrypt,
    Custom,
}

/// Identifies a domain.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainIdRequest {
    /// ID of the domain
    pub domain_id: String,
}

fn default_domain_path() -> String {
    "/".to_string()
}

/// Request to attach a domain to an application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    /// ID of the application to route to
    pub application_id: String,
    /// Hostname, e.g. `app.example.com`
    pub host: String,
    /// Path prefix to route
    #[serde(default = "default_domain_path")]
    pub path: String,
    /// Container port to route to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Serve the domain over HTTPS
    #[serde(default)]
    pub https: bool,
    /// How the TLS certificate is provisioned
    #[serde(default)]
    pub certificate_type: CertificateType,
}

/// Request to generate a hostname.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDomainRequest {
    /// Internal app name of the application
    pub app_name: String,
    /// Remote server hosting the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}
