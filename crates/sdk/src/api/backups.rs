//! Backups API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::databases::DatabaseKind;

/// Backups API for scheduling, running and restoring database backups.
pub struct BackupsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> BackupsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// Create a backup schedule for a database.
    pub async fn create(&self, request: &CreateBackupRequest) -> DokployResult<Value> {
        let mut body = request.kind.id_body(&request.database_id);
        body.insert("databaseType".into(), request.kind.resource().into());
        body.insert("destinationId".into(), request.destination_id.clone().into());
        body.insert("schedule".into(), request.schedule.clone().into());
        body.insert("prefix".into(), request.prefix.clone().into());
        body.insert("database".into(), request.database.clone().into());
        body.insert("enabled".into(), request.enabled.into());
        if let Some(count) = request.keep_latest_count {
            body.insert("keepLatestCount".into(), count.into());
        }

        self.client.http.post(paths::BACKUP_CREATE, &body).await
    }

    /// Run a backup immediately.
    pub async fn run(&self, request: &RunBackupRequest) -> DokployResult<Value> {
        let path = paths::resource_verb(
            "backup",
            &format!("manualBackup{}", request.kind.backup_suffix()),
        );
        let mut body = Map::new();
        body.insert("backupId".into(), request.backup_id.clone().into());
        self.client.http.post(&path, &body).await
    }

    /// Restore a database from a backup file.
    pub async fn restore(&self, request: &RestoreBackupRequest) -> DokployResult<Value> {
        let mut body = Map::new();
        body.insert("databaseId".into(), request.database_id.clone().into());
        body.insert("databaseType".into(), request.kind.resource().into());
        body.insert("destinationId".into(), request.destination_id.clone().into());
        body.insert("backupFile".into(), request.backup_file.clone().into());
        body.insert("databaseName".into(), request.database_name.clone().into());

        self.client.http.post(paths::BACKUP_RESTORE, &body).await
    }

    /// Delete a backup schedule.
    pub async fn remove(&self, request: &BackupIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::BACKUP_REMOVE, request).await
    }

    /// List backup destinations (S3 buckets and the like).
    pub async fn destinations(&self) -> DokployResult<Value> {
        self.client.http.get(paths::DESTINATION_ALL).await
    }
}

/// Identifies a backup schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackupIdRequest {
    /// ID of the backup schedule
    pub backup_id: String,
}

fn default_true() -> bool {
    true
}

/// Request to create a backup schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBackupRequest {
    /// Database engine
    pub kind: DatabaseKind,
    /// ID of the database to back up
    pub database_id: String,
    /// ID of the backup destination
    pub destination_id: String,
    /// Cron expression, e.g. `0 3 * * *`
    pub schedule: String,
    /// Folder prefix inside the destination
    pub prefix: String,
    /// Name of the database to dump
    pub database: String,
    /// Whether the schedule is active
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Number of most recent backups to keep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_latest_count: Option<u32>,
}

/// Request to run a backup immediately.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunBackupRequest {
    /// Database engine the backup belongs to
    pub kind: DatabaseKind,
    /// ID of the backup schedule
    pub backup_id: String,
}

/// Request to restore a database from a backup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoreBackupRequest {
    /// Database engine
    pub kind: DatabaseKind,
    /// ID of the database to restore into
    pub database_id: String,
    /// ID of the destination holding the backup
    pub destination_id: String,
    /// Path of the backup file inside the destination
    pub backup_file: String,
    /// Name of the database to restore
    pub database_name: String,
}
