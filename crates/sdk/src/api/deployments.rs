//! Deployments API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use serde_json::Value;

use super::applications::ApplicationIdRequest;

/// Deployments API for inspecting deployment history.
pub struct DeploymentsApi<'a> {
    client: &'a DokployClient,
}

impl<'a> DeploymentsApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List the deployments of an application, newest first.
    pub async fn list(&self, request: &ApplicationIdRequest) -> DokployResult<Value> {
        self.client
            .http
            .get_with_query(paths::DEPLOYMENT_ALL, request)
            .await
    }
}
