//! Main client for the Dokploy SDK.

use crate::api::*;
use crate::config::{AuthScheme, ClientConfig, RemovalVerb, DEFAULT_BASE_URL};
use crate::error::{DokployError, DokployResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Dokploy API.
///
/// Cloning is cheap; clones share the configuration and connection pool.
#[derive(Debug, Clone)]
pub struct DokployClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl DokployClient {
    /// Create a new client builder.
    pub fn builder() -> DokployClientBuilder {
        DokployClientBuilder::new()
    }

    /// Create a client from an already resolved configuration.
    pub fn from_config(config: ClientConfig) -> DokployResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the projects API.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Get the environments API.
    pub fn environments(&self) -> EnvironmentsApi<'_> {
        EnvironmentsApi::new(self)
    }

    /// Get the applications API.
    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi::new(self)
    }

    /// Get the deployments API.
    pub fn deployments(&self) -> DeploymentsApi<'_> {
        DeploymentsApi::new(self)
    }

    /// Get the databases API.
    pub fn databases(&self) -> DatabasesApi<'_> {
        DatabasesApi::new(self)
    }

    /// Get the domains API.
    pub fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(self)
    }

    /// Get the backups API.
    pub fn backups(&self) -> BackupsApi<'_> {
        BackupsApi::new(self)
    }

    /// Get the servers API.
    pub fn servers(&self) -> ServersApi<'_> {
        ServersApi::new(self)
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the registries API.
    pub fn registries(&self) -> RegistriesApi<'_> {
        RegistriesApi::new(self)
    }

    /// Get the schedules API.
    pub fn schedules(&self) -> SchedulesApi<'_> {
        SchedulesApi::new(self)
    }

    /// Get the mounts API.
    pub fn mounts(&self) -> MountsApi<'_> {
        MountsApi::new(self)
    }

    /// Get the ports API.
    pub fn ports(&self) -> PortsApi<'_> {
        PortsApi::new(self)
    }

    /// Get the certificates API.
    pub fn certificates(&self) -> CertificatesApi<'_> {
        CertificatesApi::new(self)
    }

    /// Get the notifications API.
    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(self)
    }

    /// Get the SSH keys API.
    pub fn ssh_keys(&self) -> SshKeysApi<'_> {
        SshKeysApi::new(self)
    }

    /// Get the git providers API.
    pub fn git_providers(&self) -> GitProvidersApi<'_> {
        GitProvidersApi::new(self)
    }
}

/// Builder for creating a DokployClient.
pub struct DokployClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    debug: bool,
    auth_scheme: AuthScheme,
    removal_verb: RemovalVerb,
    timeout: Option<Duration>,
}

impl DokployClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            debug: false,
            auth_scheme: AuthScheme::default(),
            removal_verb: RemovalVerb::default(),
            timeout: None,
        }
    }

    /// Set the base URL of the Dokploy instance.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API credential.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Enable request and error logging.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Choose the header that carries the credential.
    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Pin the deletion verb served by the target instance.
    pub fn removal_verb(mut self, verb: RemovalVerb) -> Self {
        self.removal_verb = verb;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> DokployResult<DokployClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DokployError::Config("api_key is required".to_string()))?;

        let base_url_str = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            api_key,
            debug: self.debug,
            auth_scheme: self.auth_scheme,
            removal_verb: self.removal_verb,
            timeout: self.timeout,
        };

        DokployClient::from_config(config)
    }
}

impl Default for DokployClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
