//! Registries API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registries API for managing Docker registries.
pub struct RegistriesApi<'a> {
    client: &'a DokployClient,
}

impl<'a> RegistriesApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List configured registries.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::REGISTRY_ALL).await
    }

    /// Add a registry.
    pub async fn create(&self, request: &CreateRegistryRequest) -> DokployResult<Value> {
        self.client.http.post(paths::REGISTRY_CREATE, request).await
    }

    /// Remove a registry.
    pub async fn remove(&self, request: &RegistryIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::REGISTRY_REMOVE, request).await
    }
}

/// Identifies a registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistryIdRequest {
    /// ID of the registry
    pub registry_id: String,
}

fn default_registry_type() -> String {
    "cloud".to_string()
}

/// Request to add a registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistryRequest {
    /// Display name of the registry
    pub registry_name: String,
    /// Registry URL, e.g. `ghcr.io`
    pub registry_url: String,
    /// Login user
    pub username: String,
    /// Login password or token
    pub password: String,
    /// Registry type
    #[serde(default = "default_registry_type")]
    pub registry_type: String,
    /// Prefix prepended to pushed image names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prefix: Option<String>,
    /// Remote server the registry is used from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}
