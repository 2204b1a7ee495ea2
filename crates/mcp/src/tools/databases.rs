// Database and backup tools

use crate::tools::operation::{ToolOutput, TypedTool};
use crate::tools::registry::{RegistryError, ToolRegistry, ToolTier};
use dokploy_sdk::api::backups::{
    BackupIdRequest, CreateBackupRequest, RestoreBackupRequest, RunBackupRequest,
};
use dokploy_sdk::api::databases::{CreateDatabaseRequest, DatabaseRef};
use dokploy_sdk::api::projects::ProjectIdRequest;
use dokploy_sdk::api::NoArguments;
use dokploy_sdk::DokployClient;

pub fn register(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-databases",
            "List databases",
            "List every database of a project (postgres, mysql, mariadb, mongo, redis) \
             across all its environments. Each entry is tagged with `environmentId`, \
             `environmentName` and its engine as `type`.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ProjectIdRequest| async move {
                client.databases().list(&args).await.map(ToolOutput::list)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "get-database",
            "Get database",
            "Get a database of the given engine by ID.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: DatabaseRef| async move {
                client.databases().get(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-database",
            "Create database",
            "Create a database service. Without `environmentId` it is placed in the \
             project's default environment. Deploy it afterwards to start it.",
            ToolTier::Write,
            |client: DokployClient, args: CreateDatabaseRequest| async move {
                let created = client.databases().create(&args).await?;
                Ok(ToolOutput::done(
                    format!("{} database '{}' created", args.kind.resource(), args.name),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-database",
            "Delete database",
            "Delete a database service and its data volume.",
            ToolTier::Destructive,
            |client: DokployClient, args: DatabaseRef| async move {
                let removed = client.databases().remove(&args).await?;
                Ok(ToolOutput::done(format!("Database {} deleted", args.database_id), removed))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "deploy-database",
            "Deploy database",
            "Deploy (or re-deploy) a database container.",
            ToolTier::Write,
            |client: DokployClient, args: DatabaseRef| async move {
                let queued = client.databases().deploy(&args).await?;
                Ok(ToolOutput::done(
                    format!("Deployment of database {} queued", args.database_id),
                    queued,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "start-database",
            "Start database",
            "Start a stopped database.",
            ToolTier::Write,
            |client: DokployClient, args: DatabaseRef| async move {
                let started = client.databases().start(&args).await?;
                Ok(ToolOutput::done(format!("Database {} started", args.database_id), started))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "stop-database",
            "Stop database",
            "Stop a running database. Its data is kept.",
            ToolTier::Destructive,
            |client: DokployClient, args: DatabaseRef| async move {
                let stopped = client.databases().stop(&args).await?;
                Ok(ToolOutput::done(format!("Database {} stopped", args.database_id), stopped))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "list-backups",
            "List backups",
            "List the backup schedules configured for a database.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: DatabaseRef| async move {
                client.databases().backups(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-backup",
            "Create backup schedule",
            "Schedule recurring backups of a database to a backup destination.",
            ToolTier::Write,
            |client: DokployClient, args: CreateBackupRequest| async move {
                let created = client.backups().create(&args).await?;
                Ok(ToolOutput::done(
                    format!("Backup schedule '{}' created for {}", args.schedule, args.database_id),
                    created,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "run-backup",
            "Run backup",
            "Run a backup schedule immediately.",
            ToolTier::Write,
            |client: DokployClient, args: RunBackupRequest| async move {
                let ran = client.backups().run(&args).await?;
                Ok(ToolOutput::done(format!("Backup {} started", args.backup_id), ran))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "restore-backup",
            "Restore backup",
            "Restore a database from a backup file. Existing data is overwritten.",
            ToolTier::Destructive,
            |client: DokployClient, args: RestoreBackupRequest| async move {
                let restored = client.backups().restore(&args).await?;
                Ok(ToolOutput::done(
                    format!("Restore of {} into {} started", args.backup_file, args.database_id),
                    restored,
                ))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-backup",
            "Delete backup schedule",
            "Delete a backup schedule. Backup files already stored are kept.",
            ToolTier::Destructive,
            |client: DokployClient, args: BackupIdRequest| async move {
                let removed = client.backups().remove(&args).await?;
                Ok(ToolOutput::done(format!("Backup schedule {} deleted", args.backup_id), removed))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "list-destinations",
            "List backup destinations",
            "List the S3-compatible destinations backups can be written to.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.backups().destinations().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    Ok(())
}
