//! Mounts API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mounts API for volumes, bind mounts and file mounts.
pub struct MountsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> MountsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// Attach a mount to a service.
    pub async fn create(&self, request: &CreateMountRequest) -> DokployResult<Value> {
        self.client.http.post(paths::MOUNT_CREATE, request).await
    }

    /// Remove a mount.
    pub async fn remove(&self, request: &MountIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::MOUNT_REMOVE, request).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MountType {
    Bind,
    Volume,
    File,
}

/// Service kinds a mount can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Application,
    Compose,
    Postgres,
    Mysql,
    Mariadb,
    Mongo,
    Redis,
}

/// Identifies a mount.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MountIdRequest {
    /// ID of the mount
    pub mount_id: String,
}

/// Request to attach a mount.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMountRequest {
    /// Mount kind
    #[serde(rename = "type")]
    pub mount_type: MountType,
    /// Path inside the container
    pub mount_path: String,
    /// Host path (bind mounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,
    /// Volume name (volume mounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
    /// File content (file mounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// ID of the service the mount belongs to
    pub service_id: String,
    /// Kind of service the ID refers to
    pub service_type: ServiceType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_type_wire_name() {
        let request = CreateMountRequest {
            mount_type: MountType::Volume,
            mount_path: "/data".to_string(),
            host_path: None,
            volume_name: Some("data".to_string()),
            content: None,
            service_id: "pg1".to_string(),
            service_type: ServiceType::Postgres,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "type": "volume",
                "mountPath": "/data",
                "volumeName": "data",
                "serviceId": "pg1",
                "serviceType": "postgres"
            })
        );
    }
}
