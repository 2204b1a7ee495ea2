//! Notifications API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Notifications API for deployment and backup alerts.
pub struct NotificationsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List notification channels.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::NOTIFICATION_ALL).await
    }

    /// Add a Slack channel.
    pub async fn create_slack(&self, request: &CreateSlackNotificationRequest) -> DokployResult<Value> {
        self.client
            .http
            .post(paths::NOTIFICATION_CREATE_SLACK, request)
            .await
    }

    /// Remove a notification channel.
    pub async fn remove(&self, request: &NotificationIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::NOTIFICATION_REMOVE, request).await
    }
}

/// Identifies a notification channel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationIdRequest {
    /// ID of the notification channel
    pub notification_id: String,
}

fn default_true() -> bool {
    true
}

/// Request to add a Slack notification channel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlackNotificationRequest {
    /// Display name of the channel
    pub name: String,
    /// Slack incoming webhook URL
    pub webhook_url: String,
    /// Slack channel, e.g. `#deploys`
    pub channel: String,
    /// Notify on successful deployments
    #[serde(default = "default_true")]
    pub app_deploy: bool,
    /// Notify on failed builds
    #[serde(default = "default_true")]
    pub app_build_error: bool,
    /// Notify on database backups
    #[serde(default = "default_true")]
    pub database_backup: bool,
    /// Notify on Docker cleanup runs
    #[serde(default)]
    pub docker_cleanup: bool,
    /// Notify when Dokploy restarts
    #[serde(default)]
    pub dokploy_restart: bool,
}
