//! Environments API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::projects::ProjectIdRequest;

/// Environments API for managing the environments of a project.
pub struct EnvironmentsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> EnvironmentsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List the environments of a project.
    pub async fn list(&self, request: &ProjectIdRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::ENVIRONMENT_BY_PROJECT, request)
            .await
    }

    /// Create an environment inside a project.
    pub async fn create(&self, request: &CreateEnvironmentRequest) -> DokployResult<Value> {
        self.client.http.post(paths::ENVIRONMENT_CREATE, request).await
    }

    /// Delete an environment.
    pub async fn remove(&self, request: &EnvironmentIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::ENVIRONMENT_REMOVE, request).await
    }
}

/// Identifies an environment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentIdRequest {
    /// ID of the environment
    pub environment_id: String,
}

/// Request to create an environment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    /// ID of the project the environment belongs to
    pub project_id: String,
    /// Name of the environment
    pub name: String,
    /// Optional description of the environment
    #[serde(default)]
    pub description: String,
}
