//! Schedules API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schedules API for cron jobs attached to applications and servers.
pub struct SchedulesApi<'a> {
    client: &'a DokployClient,
}

impl<'a> SchedulesApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List the schedules of an application, compose service or server.
    pub async fn list(&self, request: &ListSchedulesRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::SCHEDULE_LIST, request)
            .await
    }

    /// Create a schedule.
    pub async fn create(&self, request: &CreateScheduleRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SCHEDULE_CREATE, request).await
    }

    /// Run a schedule now.
    pub async fn run(&self, request: &ScheduleIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SCHEDULE_RUN, request).await
    }

    /// Delete a schedule.
    pub async fn remove(&self, request: &ScheduleIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::SCHEDULE_DELETE, request).await
    }
}

/// What a schedule is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleType {
    Application,
    Compose,
    Server,
    DokployServer,
}

/// Shell the scheduled command runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    #[default]
    Bash,
    Sh,
}

/// Identifies a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleIdRequest {
    /// ID of the schedule
    pub schedule_id: String,
}

/// Request to list schedules.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSchedulesRequest {
    /// ID of the application, compose service or server
    pub id: String,
    /// Kind of owner the ID refers to
    pub schedule_type: ScheduleType,
}

fn default_true() -> bool {
    true
}

/// Request to create a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    /// Display name of the schedule
    pub name: String,
    /// Cron expression, e.g. `*/15 * * * *`
    pub cron_expression: String,
    /// Command to run
    pub command: String,
    /// Kind of owner the schedule is attached to
    pub schedule_type: ScheduleType,
    /// Owning application (for `application` schedules)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Owning server (for `server` schedules)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    /// Shell the command runs in
    #[serde(default)]
    pub shell_type: ShellType,
    /// Whether the schedule is active
    #[serde(default = "default_true")]
    pub enabled: bool,
}
