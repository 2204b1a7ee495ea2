// Project and environment tools

use crate::tools::operation::{ToolOutput, TypedTool};
use crate::tools::registry::{RegistryError, ToolRegistry, ToolTier};
use dokploy_sdk::api::environments::{CreateEnvironmentRequest, EnvironmentIdRequest};
use dokploy_sdk::api::projects::{CreateProjectRequest, ProjectIdRequest, UpdateProjectRequest};
use dokploy_sdk::api::NoArguments;
use dokploy_sdk::DokployClient;

pub fn register(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-projects",
            "List projects",
            "List all projects with their environments and services.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.projects().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "get-project",
            "Get project",
            "Get a project by ID, including its environments and every service in them.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ProjectIdRequest| async move {
                client.projects().get(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-project",
            "Create project",
            "Create a new project. Dokploy adds a default `production` environment to it.",
            ToolTier::Write,
            |client: DokployClient, args: CreateProjectRequest| async move {
                let created = client.projects().create(&args).await?;
                Ok(ToolOutput::done(format!("Project '{}' created", args.name), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "update-project",
            "Update project",
            "Rename a project or change its description.",
            ToolTier::Write,
            |client: DokployClient, args: UpdateProjectRequest| async move {
                let updated = client.projects().update(&args).await?;
                Ok(ToolOutput::done(format!("Project {} updated", args.project_id), updated))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-project",
            "Delete project",
            "Delete a project together with every environment and service in it.",
            ToolTier::Destructive,
            |client: DokployClient, args: ProjectIdRequest| async move {
                let removed = client.projects().remove(&args).await?;
                Ok(ToolOutput::done(format!("Project {} deleted", args.project_id), removed))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "list-environments",
            "List environments",
            "List the environments of a project.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ProjectIdRequest| async move {
                client.environments().list(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-environment",
            "Create environment",
            "Create an environment (e.g. `staging`) inside a project.",
            ToolTier::Write,
            |client: DokployClient, args: CreateEnvironmentRequest| async move {
                let created = client.environments().create(&args).await?;
                Ok(ToolOutput::done(format!("Environment '{}' created", args.name), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-environment",
            "Delete environment",
            "Delete an environment and the services it contains.",
            ToolTier::Destructive,
            |client: DokployClient, args: EnvironmentIdRequest| async move {
                let removed = client.environments().remove(&args).await?;
                Ok(ToolOutput::done(
                    format!("Environment {} deleted", args.environment_id),
                    removed,
                ))
            },
        )
        .shared(),
    )?;

    Ok(())
}
