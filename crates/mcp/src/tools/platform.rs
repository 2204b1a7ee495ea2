// Platform-wide tools: servers, users, registries, SSH keys, git providers,
// notifications and schedules

use crate::tools::operation::{ToolOutput, TypedTool};
use crate::tools::registry::{RegistryError, ToolRegistry, ToolTier};
use dokploy_sdk::api::notifications::{CreateSlackNotificationRequest, NotificationIdRequest};
use dokploy_sdk::api::registries::{CreateRegistryRequest, RegistryIdRequest};
use dokploy_sdk::api::schedules::{CreateScheduleRequest, ListSchedulesRequest, ScheduleIdRequest};
use dokploy_sdk::api::servers::{CreateServerRequest, ServerIdRequest};
use dokploy_sdk::api::ssh_keys::{CreateSshKeyRequest, GenerateSshKeyRequest, SshKeyIdRequest};
use dokploy_sdk::api::users::UserIdRequest;
use dokploy_sdk::api::NoArguments;
use dokploy_sdk::DokployClient;

pub fn register(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    register_servers(registry, client)?;
    register_users(registry, client)?;
    register_registries(registry, client)?;
    register_ssh_keys(registry, client)?;
    register_notifications(registry, client)?;
    register_schedules(registry, client)?;

    registry.register(
        TypedTool::new(
            client,
            "list-git-providers",
            "List git providers",
            "List the connected GitHub, GitLab, Bitbucket and Gitea accounts.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.git_providers().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )
}

fn register_servers(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-servers",
            "List servers",
            "List the remote servers Dokploy can deploy to.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.servers().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "get-server",
            "Get server",
            "Get a remote server by ID.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ServerIdRequest| async move {
                client.servers().get(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-server",
            "Add server",
            "Register a remote server reachable over SSH.",
            ToolTier::Write,
            |client: DokployClient, args: CreateServerRequest| async move {
                let created = client.servers().create(&args).await?;
                Ok(ToolOutput::done(
                    format!("Server '{}' ({}) added", args.name, args.ip_address),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-server",
            "Remove server",
            "Remove a remote server from Dokploy.",
            ToolTier::Destructive,
            |client: DokployClient, args: ServerIdRequest| async move {
                let removed = client.servers().remove(&args).await?;
                Ok(ToolOutput::done(format!("Server {} removed", args.server_id), removed))
            },
        )
        .shared(),
    )
}

fn register_users(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-users",
            "List users",
            "List the members of the organization.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.users().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "get-user",
            "Get user",
            "Get a user by ID.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: UserIdRequest| async move {
                client.users().get(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )
}

fn register_registries(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-registries",
            "List registries",
            "List the Docker registries configured in Dokploy.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.registries().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-registry",
            "Add registry",
            "Add a Docker registry with login credentials.",
            ToolTier::Write,
            |client: DokployClient, args: CreateRegistryRequest| async move {
                let created = client.registries().create(&args).await?;
                Ok(ToolOutput::done(
                    format!("Registry '{}' added", args.registry_name),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-registry",
            "Remove registry",
            "Remove a Docker registry.",
            ToolTier::Destructive,
            |client: DokployClient, args: RegistryIdRequest| async move {
                let removed = client.registries().remove(&args).await?;
                Ok(ToolOutput::done(format!("Registry {} removed", args.registry_id), removed))
            },
        )
        .shared(),
    )
}

fn register_ssh_keys(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-ssh-keys",
            "List SSH keys",
            "List the SSH keys stored in Dokploy. Private keys are not included.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.ssh_keys().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-ssh-key",
            "Store SSH key",
            "Store an existing SSH key pair.",
            ToolTier::Write,
            |client: DokployClient, args: CreateSshKeyRequest| async move {
                let created = client.ssh_keys().create(&args).await?;
                Ok(ToolOutput::done(format!("SSH key '{}' stored", args.name), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "generate-ssh-key",
            "Generate SSH key",
            "Generate a new SSH key pair. The result is not stored until passed to create-ssh-key.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: GenerateSshKeyRequest| async move {
                client.ssh_keys().generate(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-ssh-key",
            "Delete SSH key",
            "Delete a stored SSH key.",
            ToolTier::Destructive,
            |client: DokployClient, args: SshKeyIdRequest| async move {
                let removed = client.ssh_keys().remove(&args).await?;
                Ok(ToolOutput::done(format!("SSH key {} deleted", args.ssh_key_id), removed))
            },
        )
        .shared(),
    )
}

fn register_notifications(
    registry: &mut ToolRegistry,
    client: &DokployClient,
) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-notifications",
            "List notifications",
            "List the configured notification channels.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.notifications().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-slack-notification",
            "Add Slack notification",
            "Send deployment, build failure and backup events to a Slack channel.",
            ToolTier::Write,
            |client: DokployClient, args: CreateSlackNotificationRequest| async move {
                let created = client.notifications().create_slack(&args).await?;
                Ok(ToolOutput::done(
                    format!("Slack notification '{}' added for {}", args.name, args.channel),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-notification",
            "Delete notification",
            "Delete a notification channel.",
            ToolTier::Destructive,
            |client: DokployClient, args: NotificationIdRequest| async move {
                let removed = client.notifications().remove(&args).await?;
                Ok(ToolOutput::done(
                    format!("Notification {} deleted", args.notification_id),
                    removed,
                ))
            },
        )
        .shared(),
    )
}

fn register_schedules(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-schedules",
            "List schedules",
            "List the scheduled commands of an application, compose service or server.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ListSchedulesRequest| async move {
                client.schedules().list(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-schedule",
            "Create schedule",
            "Run a command on a cron schedule.",
            ToolTier::Write,
            |client: DokployClient, args: CreateScheduleRequest| async move {
                let created = client.schedules().create(&args).await?;
                Ok(ToolOutput::done(
                    format!("Schedule '{}' ({}) created", args.name, args.cron_expression),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "run-schedule",
            "Run schedule",
            "Run a scheduled command immediately.",
            ToolTier::Write,
            |client: DokployClient, args: ScheduleIdRequest| async move {
                let ran = client.schedules().run(&args).await?;
                Ok(ToolOutput::done(format!("Schedule {} started", args.schedule_id), ran))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-schedule",
            "Delete schedule",
            "Delete a scheduled command.",
            ToolTier::Destructive,
            |client: DokployClient, args: ScheduleIdRequest| async move {
                let removed = client.schedules().remove(&args).await?;
                Ok(ToolOutput::done(format!("Schedule {} deleted", args.schedule_id), removed))
            },
        )
        .shared(),
    )
}
