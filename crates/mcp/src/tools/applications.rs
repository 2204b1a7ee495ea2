// Application tools: lifecycle, build source, logs, deployments, mounts, ports

use crate::tools::operation::{ToolOutput, TypedTool};
use crate::tools::registry::{RegistryError, ToolRegistry, ToolTier};
use dokploy_sdk::api::applications::{
    ApplicationIdRequest, CreateApplicationRequest, ReadLogsRequest, SaveBuildTypeRequest,
    SaveDockerProviderRequest, SaveEnvironmentRequest, SaveGitProviderRequest,
    UpdateApplicationRequest,
};
use dokploy_sdk::api::mounts::{CreateMountRequest, MountIdRequest};
use dokploy_sdk::api::ports::{CreatePortRequest, PortIdRequest};
use dokploy_sdk::api::projects::ProjectIdRequest;
use dokploy_sdk::DokployClient;

pub fn register(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-applications",
            "List applications",
            "List every application of a project across all its environments. \
             Each entry is tagged with `environmentId`, `environmentName` and `type`.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ProjectIdRequest| async move {
                client.applications().list(&args).await.map(ToolOutput::list)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "get-application",
            "Get application",
            "Get an application with its build settings, domains and deployments.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                client.applications().get(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-application",
            "Create application",
            "Create an application in a project. Without `environmentId` it is placed \
             in the project's default environment.",
            ToolTier::Write,
            |client: DokployClient, args: CreateApplicationRequest| async move {
                let created = client.applications().create(&args).await?;
                Ok(ToolOutput::done(format!("Application '{}' created", args.name), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "update-application",
            "Update application",
            "Change an application's name, description, start command, replicas or auto-deploy flag.",
            ToolTier::Write,
            |client: DokployClient, args: UpdateApplicationRequest| async move {
                let updated = client.applications().update(&args).await?;
                Ok(ToolOutput::done(
                    format!("Application {} updated", args.application_id),
                    updated,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-application",
            "Delete application",
            "Delete an application, its containers and its configuration.",
            ToolTier::Destructive,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                let removed = client.applications().remove(&args).await?;
                Ok(ToolOutput::done(
                    format!("Application {} deleted", args.application_id),
                    removed,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "deploy-application",
            "Deploy application",
            "Queue a build and deployment of an application.",
            ToolTier::Write,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                let queued = client.applications().deploy(&args).await?;
                Ok(ToolOutput::done(
                    format!("Deployment of {} queued", args.application_id),
                    queued,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "redeploy-application",
            "Redeploy application",
            "Rebuild and redeploy an application from its current source.",
            ToolTier::Write,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                let queued = client.applications().redeploy(&args).await?;
                Ok(ToolOutput::done(
                    format!("Redeployment of {} queued", args.application_id),
                    queued,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "start-application",
            "Start application",
            "Start a stopped application.",
            ToolTier::Write,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                let started = client.applications().start(&args).await?;
                Ok(ToolOutput::done(
                    format!("Application {} started", args.application_id),
                    started,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "stop-application",
            "Stop application",
            "Stop a running application. Its configuration is kept.",
            ToolTier::Destructive,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                let stopped = client.applications().stop(&args).await?;
                Ok(ToolOutput::done(
                    format!("Application {} stopped", args.application_id),
                    stopped,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "update-env-vars",
            "Update environment variables",
            "Replace the environment variables (and optional build arguments) of an \
             application. Takes effect on the next deployment.",
            ToolTier::Write,
            |client: DokployClient, args: SaveEnvironmentRequest| async move {
                let saved = client.applications().save_environment(&args).await?;
                Ok(ToolOutput::done(
                    format!("Environment of {} saved", args.application_id),
                    saved,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "save-build-type",
            "Save build type",
            "Choose how an application is built (Dockerfile, Nixpacks, buildpacks or static).",
            ToolTier::Write,
            |client: DokployClient, args: SaveBuildTypeRequest| async move {
                let saved = client.applications().save_build_type(&args).await?;
                Ok(ToolOutput::done(
                    format!("Build type of {} saved", args.application_id),
                    saved,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "save-docker-provider",
            "Use Docker image",
            "Deploy an application from a Docker image, optionally from a private registry.",
            ToolTier::Write,
            |client: DokployClient, args: SaveDockerProviderRequest| async move {
                let saved = client.applications().save_docker_provider(&args).await?;
                Ok(ToolOutput::done(
                    format!("Application {} now uses image {}", args.application_id, args.docker_image),
                    saved,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "save-git-provider",
            "Use git repository",
            "Deploy an application from a git repository URL and branch.",
            ToolTier::Write,
            |client: DokployClient, args: SaveGitProviderRequest| async move {
                let saved = client.applications().save_git_provider(&args).await?;
                Ok(ToolOutput::done(
                    format!(
                        "Application {} now builds from {}#{}",
                        args.application_id, args.custom_git_url, args.custom_git_branch
                    ),
                    saved,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "get-logs",
            "Get application logs",
            "Read the most recent container log lines of an application.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ReadLogsRequest| async move {
                client.applications().read_logs(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "list-deployments",
            "List deployments",
            "List the deployment history of an application, newest first.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                client.deployments().list(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-mount",
            "Create mount",
            "Attach a bind mount, named volume or file mount to a service.",
            ToolTier::Write,
            |client: DokployClient, args: CreateMountRequest| async move {
                let created = client.mounts().create(&args).await?;
                Ok(ToolOutput::done(format!("Mount at {} created", args.mount_path), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-mount",
            "Delete mount",
            "Detach a mount from its service.",
            ToolTier::Destructive,
            |client: DokployClient, args: MountIdRequest| async move {
                let removed = client.mounts().remove(&args).await?;
                Ok(ToolOutput::done(format!("Mount {} deleted", args.mount_id), removed))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-port",
            "Publish port",
            "Publish a container port of an application on the host.",
            ToolTier::Write,
            |client: DokployClient, args: CreatePortRequest| async move {
                let created = client.ports().create(&args).await?;
                Ok(ToolOutput::done(
                    format!("Port {} -> {} published", args.published_port, args.target_port),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-port",
            "Unpublish port",
            "Stop publishing a port.",
            ToolTier::Destructive,
            |client: DokployClient, args: PortIdRequest| async move {
                let removed = client.ports().remove(&args).await?;
                Ok(ToolOutput::done(format!("Port {} deleted", args.port_id), removed))
            },
        )
        .shared(),
    )?;

    Ok(())
}
