//! SSH keys API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SSH keys API for keys used to reach servers and git remotes.
pub struct SshKeysApi<'a> {
    client: &'a DokployClient,
}

impl<'a> SshKeysApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List stored SSH keys.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::SSH_KEY_ALL).await
    }

    /// Store an existing key pair.
    pub async fn create(&self, request: &CreateSshKeyRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SSH_KEY_CREATE, request).await
    }

    /// Generate a new key pair on the Dokploy host.
    pub async fn generate(&self, request: &GenerateSshKeyRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SSH_KEY_GENERATE, request).await
    }

    /// Delete a stored key.
    pub async fn remove(&self, request: &SshKeyIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SSH_KEY_REMOVE, request).await
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SshKeyType {
    Rsa,
    #[default]
    Ed25519,
}

/// Identifies an SSH key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SshKeyIdRequest {
    /// ID of the SSH key
    pub ssh_key_id: String,
}

/// Request to store a key pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSshKeyRequest {
    /// Display name of the key
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OpenSSH public key
    pub public_key: String,
    /// OpenSSH private key
    pub private_key: String,
}

/// Request to generate a key pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSshKeyRequest {
    /// Key algorithm
    #[serde(rename = "type", default)]
    pub key_type: SshKeyType,
}
