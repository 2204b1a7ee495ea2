//! Users API endpoints.

use crate::client::DokployClient;
use crate::error::DokployResult;
use crate::paths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Users API for inspecting organization members.
pub struct UsersApi<'a> {
    client: &'a DokployClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a DokployClient) -> Self {
        Self { client }
    }

    /// List the members of the organization.
    pub async fn list(&self) -> DokployResult<Value> {
        self.client.http.get(paths::USER_ALL).await
    }

    /// Get a user.
    pub async fn get(&self, request: &UserIdRequest) -> DokployResult<Value> {
        self.client.http.get_with_query(paths::USER_ONE, request).await
    }
}

/// Identifies a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdRequest {
    /// ID of the user
    pub user_id: String,
}
