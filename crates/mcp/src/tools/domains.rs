// Domain and certificate tools

use crate::tools::operation::{ToolOutput, TypedTool};
use crate::tools::registry::{RegistryError, ToolRegistry, ToolTier};
use dokploy_sdk::api::applications::ApplicationIdRequest;
use dokploy_sdk::api::certificates::{CertificateIdRequest, CreateCertificateRequest};
use dokploy_sdk::api::domains::{CreateDomainRequest, DomainIdRequest, GenerateDomainRequest};
use dokploy_sdk::api::NoArguments;
use dokploy_sdk::DokployClient;

pub fn register(registry: &mut ToolRegistry, client: &DokployClient) -> Result<(), RegistryError> {
    registry.register(
        TypedTool::new(
            client,
            "list-domains",
            "List domains",
            "List the domains routed to an application.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: ApplicationIdRequest| async move {
                client.domains().list(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "add-domain",
            "Add domain",
            "Route a hostname to an application, optionally with HTTPS via Let's Encrypt.",
            ToolTier::Write,
            |client: DokployClient, args: CreateDomainRequest| async move {
                let created = client.domains().create(&args).await?;
                Ok(ToolOutput::done(format!("Domain {} added", args.host), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-domain",
            "Delete domain",
            "Stop routing a domain to its application.",
            ToolTier::Destructive,
            |client: DokployClient, args: DomainIdRequest| async move {
                let removed = client.domains().remove(&args).await?;
                Ok(ToolOutput::done(format!("Domain {} deleted", args.domain_id), removed))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "generate-domain",
            "Generate domain",
            "Generate a free `traefik.me` hostname for an application.",
            ToolTier::ReadOnly,
            |client: DokployClient, args: GenerateDomainRequest| async move {
                client.domains().generate(&args).await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "list-certificates",
            "List certificates",
            "List the custom TLS certificates uploaded to Dokploy.",
            ToolTier::ReadOnly,
            |client: DokployClient, _: NoArguments| async move {
                client.certificates().list().await.map(ToolOutput::json)
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "create-certificate",
            "Upload certificate",
            "Upload a PEM certificate chain and private key.",
            ToolTier::Write,
            |client: DokployClient, args: CreateCertificateRequest| async move {
                let created = client.certificates().create(&args).await?;
                Ok(ToolOutput::done(format!("Certificate '{}' uploaded", args.name), created))
            },
        )
        .shared(),
    )?;

    registry.register(
        TypedTool::new(
            client,
            "delete-certificate",
            "Delete certificate",
            "Delete an uploaded certificate.",
            ToolTier::Destructive,
            |client: DokployClient, args: CertificateIdRequest| async move {
                let removed = client.certificates().remove(&args).await?;
                Ok(ToolOutput::done(
                    format!("Certificate {} deleted", args.certificate_id),
                    removed,
                ))
            },
        )
        .shared(),
    )?;

    Ok(())
}
