//! Applications API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::lookup::{flatten_groups, Bucket, PROJECT_ENVIRONMENTS};
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::projects::ProjectIdRequest;

const APPLICATION_BUCKETS: &[Bucket] = &[Bucket {
    key: "applications",
    label: "application",
}];

/// Applications API for managing applications.
pub struct ApplicationsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> ApplicationsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List every application of a project across all its environments.
    pub async fn list(&self, request: &ProjectIdRequest) -> DokployResult<Vec<Value>> {
        let project = self.client.projects().get(request).await?;
        Ok(flatten_groups(
            &project,
            &PROJECT_ENVIRONMENTS,
            APPLICATION_BUCKETS,
        ))
    }

    /// Get an application.
    pub async fn get(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::APPLICATION_ONE, request)
            .await
    }

    /// Create an application, in the project's default environment unless
    /// one is given.
    pub async fn create(&self, request: &CreateApplicationRequest) -> DokployResult<Value> {
        let environment_id = match request.environment_id {
            Some(ref id) => id.clone(),
            None => {
                self.client
                    .projects()
                    .default_environment_id(&request.project_id)
                    .await?
            }
        };

        let body = CreateApplicationBody {
            name: &request.name,
            app_name: request.app_name.as_deref(),
            description: request.description.as_deref(),
            environment_id: &environment_id,
            server_id: request.server_id.as_deref(),
        };
        self.client.http.post(paths::APPLICATION_CREATE, &body).await
    }

    /// Update application settings.
    pub async fn update(&self, request: &UpdateApplicationRequest) -> DokployResult<Value> {
        self.client.http.post(paths::APPLICATION_UPDATE, request).await
    }

    /// Delete an application.
    pub async fn remove(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        let path = paths::removal("application", self.client.config().removal_verb);
        self.client.http.post(&path, request).await
    }

    /// Build and deploy an application.
    pub async fn deploy(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::APPLICATION_DEPLOY, request).await
    }

    /// Redeploy an application without changing its source.
    pub async fn redeploy(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::APPLICATION_REDEPLOY, request).await
    }

    /// Start a stopped application.
    pub async fn start(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::APPLICATION_START, request).await
    }

    /// Stop a running application.
    pub async fn stop(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client.http.post(paths::APPLICATION_STOP, request).await
    }

    /// Replace the environment variables of an application.
    pub async fn save_environment(&self, request: &SaveEnvironmentRequest) -> DokployResult<Value> {
        self.client
            .http
            .post(paths::APPLICATION_SAVE_ENVIRONMENT, request)
            .await
    }

    /// Configure how an application is built.
    pub async fn save_build_type(&self, request: &SaveBuildTypeRequest) -> DokployResult<Value> {
        self.client
            .http
            .post(paths::APPLICATION_SAVE_BUILD_TYPE, request)
            .await
    }

    /// Deploy an application from a Docker image.
    pub async fn save_docker_provider(
        &self,
        request: &SaveDockerProviderRequest,
    ) -> DokployResult<Value> {
        self.client
            .http
            .post(paths::APPLICATION_SAVE_DOCKER_PROVIDER, request)
            .await
    }

    /// Deploy an application from a plain git repository.
    pub async fn save_git_provider(&self, request: &SaveGitProviderRequest) -> DokployResult<Value> {
        self.client
            .http
            .post(paths::APPLICATION_SAVE_GIT_PROVIDER, request)
            .await
    }

    /// Read the container logs of an application.
    pub async fn read_logs(&self, request: &ReadLogsRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::APPLICATION_READ_LOGS, request)
            .await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateApplicationBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    environment_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_id: Option<&'a str>,
}

/// Identifies an application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationIdRequest {
    /// ID of the application
    pub application_id: String,
}

/// Request to create an application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    /// Name of the application
    pub name: String,
    /// ID of the project the application belongs to
    pub project_id: String,
    /// Environment to create the application in; the project's default environment when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    /// Internal app name used for the container (generated by Dokploy when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    /// Optional description of the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Remote server to deploy on; the Dokploy host when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}

/// Request to update an application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    /// ID of the application to update
    pub application_id: String,
    /// New name of the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description of the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Command overriding the image entrypoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Number of replicas to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,
    /// Redeploy automatically on push
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deploy: Option<bool>,
}

/// Request to replace the environment variables of an application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveEnvironmentRequest {
    /// ID of the application
    pub application_id: String,
    /// Environment variables in KEY=value form, one per line
    pub env: String,
    /// Build arguments in KEY=value form, one per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_args: Option<String>,
}

/// Build strategies supported by Dokploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BuildType {
    Dockerfile,
    HerokuBuildpacks,
    PaketoBuildpacks,
    Nixpacks,
    Static,
    Railpack,
}

/// Request to configure how an application is built.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveBuildTypeRequest {
    /// ID of the application
    pub application_id: String,
    /// Build strategy
    pub build_type: BuildType,
    /// Path of the Dockerfile when building with `dockerfile`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    /// Docker build context path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_context_path: Option<String>,
    /// Target stage of a multi-stage Dockerfile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_build_stage: Option<String>,
    /// Directory to publish when building with `static`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_directory: Option<String>,
}

/// Request to deploy an application from a Docker image.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveDockerProviderRequest {
    /// ID of the application
    pub application_id: String,
    /// Image reference, e.g. `nginx:1.27`
    pub docker_image: String,
    /// Registry username for private images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Registry password for private images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Registry URL for private images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_url: Option<String>,
}

fn default_build_path() -> String {
    "/".to_string()
}

/// Request to deploy an application from a git repository.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveGitProviderRequest {
    /// ID of the application
    pub application_id: String,
    /// Clone URL of the repository
    pub custom_git_url: String,
    /// Branch to deploy
    pub custom_git_branch: String,
    /// Path inside the repository to build from
    #[serde(default = "default_build_path")]
    pub custom_git_build_path: String,
    /// SSH key used to clone private repositories
    #[serde(
        rename = "customGitSSHKeyId",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_git_ssh_key_id: Option<String>,
}

/// Request to read application logs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadLogsRequest {
    /// ID of the application
    pub application_id: String,
    /// Number of trailing log lines to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<u32>,
}
