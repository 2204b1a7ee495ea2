//! Servers API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Servers API for managing remote deployment servers.
pub struct ServersApi<'a> {
    client: &'a DokployClient,
}

impl<'a> ServersApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List all remote servers.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::SERVER_ALL).await
    }

    /// Get a remote server.
    pub async fn get(&self, request: &ServerIdRequest) -> DokployResult<Value> {
        self.client.http.get_with_query(paths::SERVER_ONE, request).await
    }

    /// Register a remote server.
    pub async fn create(&self, request: &CreateServerRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SERVER_CREATE, request).await
    }

    /// Remove a remote server.
    pub async fn remove(&self, request: &ServerIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SERVER_REMOVE, request).await
    }
}

/// Identifies a remote server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerIdRequest {
    /// ID of the server
    pub server_id: String,
}

fn default_ssh_port() -> u16 {
    22
}

fn default_username() -> String {
    "root".to_string()
}

/// Request to register a remote server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServerRequest {
    /// Display name of the server
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: String,
    /// Public IP address or hostname
    pub ip_address: String,
    /// SSH port
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    /// SSH user
    #[serde(default = "default_username")]
    pub username: String,
    /// ID of the SSH key Dokploy connects with
    pub ssh_key_id: String,
}
