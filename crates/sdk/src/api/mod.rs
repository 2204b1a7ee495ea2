//! Typed surface of the Dokploy API, one module per resource.
//!
//! Request types double as tool argument types: they derive `JsonSchema`
//! for the input contract and `Serialize` for the upstream payload.

pub mod applications;
pub mod backups;
pub mod certificates;
pub mod databases;
pub mod deployments;
pub mod domains;
pub mod environments;
pub mod git_providers;
pub mod mounts;
pub mod notifications;
pub mod ports;
pub mod projects;
pub mod registries;
pub mod schedules;
pub mod servers;
pub mod ssh_keys;
pub mod users;

pub use applications::ApplicationsApi;
pub use backups::BackupsApi;
pub use certificates::CertificatesApi;
pub use databases::DatabasesApi;
pub use deployments::DeploymentsApi;
pub use domains::DomainsApi;
pub use environments::EnvironmentsApi;
pub use git_providers::GitProvidersApi;
pub use mounts::MountsApi;
pub use notifications::NotificationsApi;
pub use ports::PortsApi;
pub use projects::ProjectsApi;
pub use registries::RegistriesApi;
pub use schedules::SchedulesApi;
pub use servers::ServersApi;
pub use ssh_keys::SshKeysApi;
pub use users::UsersApi;

/// Arguments for operations that take no input.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct NoArguments {}
