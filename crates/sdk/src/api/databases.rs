//! Database API endpoints.
//!
//! Dokploy exposes one router per engine (`postgres.*`, `mysql.*`, ...) with
//! the same verbs; [`DatabaseKind`] selects the router and the id field.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::lookup::{flatten_groups, Bucket, PROJECT_ENVIRONMENTS};
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::projects::ProjectIdRequest;

/// Database engines managed by Dokploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Postgres,
    Mysql,
    Mariadb,
    Mongo,
    Redis,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 5] = [
        Self::Postgres,
        Self::Mysql,
        Self::Mariadb,
        Self::Mongo,
        Self::Redis,
    ];

    /// Router prefix of the engine, e.g. `postgres`.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mariadb => "mariadb",
            Self::Mongo => "mongo",
            Self::Redis => "redis",
        }
    }

    /// Name of the identifier field, e.g. `postgresId`.
    pub fn id_key(&self) -> &'static str {
        match self {
            Self::Postgres => "postgresId",
            Self::Mysql => "mysqlId",
            Self::Mariadb => "mariadbId",
            Self::Mongo => "mongoId",
            Self::Redis => "redisId",
        }
    }

    /// Suffix of the manual backup procedure, e.g. `Postgres`.
    pub fn backup_suffix(&self) -> &'static str {
        match self {
            Self::Postgres => "Postgres",
            Self::Mysql => "Mysql",
            Self::Mariadb => "Mariadb",
            Self::Mongo => "Mongo",
            Self::Redis => "Redis",
        }
    }

    /// `{ "<kind>Id": id }`
    pub(crate) fn id_body(&self, id: &str) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert(self.id_key().to_string(), Value::String(id.to_string()));
        body
    }
}

const DATABASE_BUCKETS: &[Bucket] = &[
    Bucket { key: "postgres", label: "postgres" },
    Bucket { key: "mysql", label: "mysql" },
    Bucket { key: "mariadb", label: "mariadb" },
    Bucket { key: "mongo", label: "mongo" },
    Bucket { key: "redis", label: "redis" },
];

/// Databases API for managing database services.
pub struct DatabasesApi<'a> {
    client: &'a DokployClient,
}

impl<'a> DatabasesApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List every database of a project across environments and engines.
    pub async fn list(&self, request: &ProjectIdRequest) -> DokployResult<Vec<Value>> {
        let project = self.client.projects().get(request).await?;
        Ok(flatten_groups(&project, &PROJECT_ENVIRONMENTS, DATABASE_BUCKETS))
    }

    /// Get a database.
    pub async fn get(&self, request: &DatabaseRef) -> DokployResult<Value> {
        let path = paths::resource_verb(request.kind.resource(), "one");
        let query = [(request.kind.id_key(), request.database_id.as_str())];
        self.client.http.get_with_query(&path, &query).await
    }

    /// Create a database, in the project's default environment unless one
    /// is given.
    pub async fn create(&self, request: &CreateDatabaseRequest) -> DokployResult<Value> {
        let environment_id = match request.environment_id {
            Some(ref id) => id.clone(),
            None => {
                self.client
                    .projects()
                    .default_environment_id(&request.project_id)
                    .await?
            }
        };

        let mut body = match serde_json::to_value(request)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        body.remove("kind");
        body.remove("projectId");
        body.insert("environmentId".to_string(), Value::String(environment_id));

        let path = paths::resource_verb(request.kind.resource(), "create");
        self.client.http.post(&path, &body).await
    }

    /// Delete a database.
    pub async fn remove(&self, request: &DatabaseRef) -> DokployResult<Value> {
        let path = paths::removal(request.kind.resource(), self.client.config().removal_verb);
        self.post_id(&path, request).await
    }

    /// Deploy a database.
    pub async fn deploy(&self, request: &DatabaseRef) -> DokployResult<Value> {
        let path = paths::resource_verb(request.kind.resource(), "deploy");
        self.post_id(&path, request).await
    }

    /// Start a stopped database.
    pub async fn start(&self, request: &DatabaseRef) -> DokployResult<Value> {
        let path = paths::resource_verb(request.kind.resource(), "start");
        self.post_id(&path, request).await
    }

    /// Stop a running database.
    pub async fn stop(&self, request: &DatabaseRef) -> DokployResult<Value> {
        let path = paths::resource_verb(request.kind.resource(), "stop");
        self.post_id(&path, request).await
    }

    /// Backup schedules configured for a database.
    pub async fn backups(&self, request: &DatabaseRef) -> DokployResult<Value> {
        let record = self.get(request).await?;
        Ok(record
            .get("backups")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn post_id(&self, path: &str, request: &DatabaseRef) -> DokployResult<Value> {
        let body = request.kind.id_body(&request.database_id);
        self.client.http.post(path, &body).await
    }
}

/// Identifies a database of a given engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseRef {
    /// Database engine
    pub kind: DatabaseKind,
    /// ID of the database (postgresId, mysqlId, ...)
    pub database_id: String,
}

/// Request to create a database.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseRequest {
    /// Database engine
    pub kind: DatabaseKind,
    /// Display name of the database
    pub name: String,
    /// ID of the project the database belongs to
    pub project_id: String,
    /// Environment to create the database in; the project's default environment when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    /// Internal app name used for the container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the initial database (not used by redis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Database user (not used by redis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_user: Option<String>,
    /// Database password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_password: Option<String>,
    /// Root password (mysql and mariadb)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_root_password: Option<String>,
    /// Image override, e.g. `postgres:16`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    /// Remote server to deploy on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemovalVerb;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> DokployClient {
        DokployClient::builder()
            .base_url(server.uri())
            .api_key("test-key")
            .removal_verb(RemovalVerb::Remove)
            .build()
            .unwrap()
    }

    #[test]
    fn test_kind_naming() {
        assert_eq!(DatabaseKind::Mariadb.resource(), "mariadb");
        assert_eq!(DatabaseKind::Mongo.id_key(), "mongoId");
        assert_eq!(DatabaseKind::Mysql.backup_suffix(), "Mysql");
        let kind: DatabaseKind = serde_json::from_str("\"redis\"").unwrap();
        assert_eq!(kind, DatabaseKind::Redis);
    }

    #[tokio::test]
    async fn test_get_uses_engine_router() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/mysql.one"))
            .and(query_param("mysqlId", "m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"mysqlId": "m1"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = DatabaseRef {
            kind: DatabaseKind::Mysql,
            database_id: "m1".to_string(),
        };
        let record = client(&server).databases().get(&request).await.unwrap();
        assert_eq!(record["mysqlId"], "m1");
    }

    #[tokio::test]
    async fn test_create_in_explicit_environment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/postgres.create"))
            .and(body_json(serde_json::json!({
                "name": "db",
                "environmentId": "e1",
                "databasePassword": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"postgresId": "pg1"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateDatabaseRequest {
            kind: DatabaseKind::Postgres,
            name: "db".to_string(),
            project_id: "p1".to_string(),
            environment_id: Some("e1".to_string()),
            app_name: None,
            description: None,
            database_name: None,
            database_user: None,
            database_password: Some("secret".to_string()),
            database_root_password: None,
            docker_image: None,
            server_id: None,
        };
        let created = client(&server).databases().create(&request).await.unwrap();
        assert_eq!(created["postgresId"], "pg1");
    }

    #[tokio::test]
    async fn test_remove_sends_engine_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/redis.remove"))
            .and(body_json(serde_json::json!({"redisId": "r1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(true))
            .expect(1)
            .mount(&server)
            .await;

        let request = DatabaseRef {
            kind: DatabaseKind::Redis,
            database_id: "r1".to_string(),
        };
        client(&server).databases().remove(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_backups_default_to_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/mongo.one"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"mongoId": "m1"})))
            .mount(&server)
            .await;

        let request = DatabaseRef {
            kind: DatabaseKind::Mongo,
            database_id: "m1".to_string(),
        };
        let backups = client(&server).databases().backups(&request).await.unwrap();
        assert_eq!(backups, serde_json::json!([]));
    }
}
