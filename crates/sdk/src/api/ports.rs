//! Ports API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ports API for publishing container ports on the host.
pub struct PortsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> PortsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// Publish a port.
    pub async fn create(&self, request: &CreatePortRequest) -> DokployResult<Value> {
        self.client.http.post(paths::PORT_CREATE, request).await
    }

    /// Stop publishing a port.
    pub async fn remove(&self, request: &PortIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::PORT_DELETE, request).await
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PortProtocol {
    #[default]
    Tcp,
    Udp,
}

/// Identifies a published port.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortIdRequest {
    /// ID of the port mapping
    pub port_id: String,
}

/// Request to publish a port.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortRequest {
    /// ID of the application
    pub application_id: String,
    /// Port opened on the host
    pub published_port: u16,
    /// Port the container listens on
    pub target_port: u16,
    /// Transport protocol
    #[serde(default)]
    pub protocol: PortProtocol,
}
