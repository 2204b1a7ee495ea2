//! Certificates API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Certificates API for custom TLS certificates.
pub struct CertificatesApi<'a> {
    client: &'a DokployClient,
}

impl<'a> CertificatesApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List uploaded certificates.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::CERTIFICATE_ALL).await
    }

    /// Upload a certificate.
    pub async fn create(&self, request: &CreateCertificateRequest) -> DokployResult<Value> {
        self.client.http.post(paths::CERTIFICATE_CREATE, request).await
    }

    /// Delete a certificate.
    pub async fn remove(&self, request: &CertificateIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::CERTIFICATE_REMOVE, request).await
    }
}

/// Identifies a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateIdRequest {
    /// ID of the certificate
    pub certificate_id: String,
}

/// Request to upload a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    /// Display name of the certificate
    pub name: String,
    /// PEM-encoded certificate chain
    pub certificate_data: String,
    /// PEM-encoded private key
    pub private_key: String,
    /// Renew automatically before expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Remote server the certificate is installed on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}
