pub mod applications;
pub mod databases;
pub mod domains;
pub mod operation;
pub mod platform;
pub mod projects;
mod registry;

pub use operation::{dokploy_failure, validation_failure, ToolOutput, TypedTool};
pub use registry::{RegistryError, Tool, ToolRegistry, ToolTier};

use dokploy_sdk::DokployClient;

/// Register every Dokploy tool, bound to `client`.
pub fn register_all(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    projects::register(registry, client)?;
    applications::register(registry, client)?;
    databases::register(registry, client)?;
    domains::register(registry, client)?;
    platform::register(registry, client)?;
    Ok(())
}

/// Registry holding every Dokploy tool.
pub fn default_registry(client: &DokployClient) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    register_all(&mut registry, client)?;
    Ok(registry)
}
