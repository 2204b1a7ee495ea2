//! Projects API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::lookup::{flagged_default, resolve_default_child, PROJECT_ENVIRONMENTS};
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Projects API for managing projects.
pub struct ProjectsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List all projects.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::PROJECT_ALL).await
    }

    /// Get a project with its environments and services.
    pub async fn get(&self, request: &ProjectIdRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::PROJECT_ONE, request)
            .await
    }

    /// Create a new project.
    pub async fn create(&self, request: &CreateProjectRequest) -> DokployResult<Value> {
        self.client.http.post(paths::PROJECT_CREATE, request).await
    }

    /// Update project metadata.
    pub async fn update(&self, request: &UpdateProjectRequest) -> DokployResult<Value> {
        self.client.http.post(paths::PROJECT_UPDATE, request).await
    }

    /// Delete a project and everything in it.
    pub async fn remove(&self, request: &ProjectIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::PROJECT_REMOVE, request).await
    }

    /// Identifier of the environment flagged as default in a project.
    pub async fn default_environment_id(&self, project_id: &str) -> DokployResult<String> {
        let request = ProjectIdRequest {
            project_id: project_id.to_string(),
        };
        resolve_default_child(
            &PROJECT_ENVIRONMENTS,
            project_id,
            || self.get(&request),
            flagged_default,
        )
        .await
    }
}

/// Identifies a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdRequest {
    /// ID of the project
    pub project_id: String,
}

/// Request to create a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Name of the project
    pub name: String,
    /// Optional description of the project
    #[serde(default)]
    pub description: String,
}

/// Request to update a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    /// ID of the project to update
    pub project_id: String,
    /// New name of the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description of the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DokployError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> DokployClient {
        DokployClient::builder()
            .base_url(server.uri())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_request_defaults_description() {
        let request: CreateProjectRequest =
            serde_json::from_value(serde_json::json!({"name": "demo"})).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"name": "demo", "description": ""})
        );
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let request = UpdateProjectRequest {
            project_id: "p1".to_string(),
            name: Some("renamed".to_string()),
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"projectId": "p1", "name": "renamed"})
        );
    }

    #[tokio::test]
    async fn test_default_environment_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.one"))
            .and(query_param("projectId", "p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "projectId": "p1",
                "environments": [
                    {"environmentId": "e1", "name": "staging", "isDefault": false},
                    {"environmentId": "e2", "name": "production", "isDefault": true}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let id = client(&server)
            .projects()
            .default_environment_id("p1")
            .await
            .unwrap();
        assert_eq!(id, "e2");
    }

    #[tokio::test]
    async fn test_default_environment_missing_project() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.one"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Project not found"))
            .mount(&server)
            .await;

        let err = client(&server)
            .projects()
            .default_environment_id("missing")
            .await
            .unwrap_err();
        assert!(matches!(err, DokployError::NotFound(ref m) if m.contains("missing")));
    }
}
