//! Git providers API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use serde_json::Value;

/// Git providers API.
pub struct GitProvidersApi<'a> {
    client: &'a DokployClient,
}

impl<'a> GitProvidersApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List connected git providers (GitHub, GitLab, Bitbucket, Gitea).
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::GIT_PROVIDER_ALL).await
    }
}
