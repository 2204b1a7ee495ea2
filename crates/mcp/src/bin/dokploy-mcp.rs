// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use dokploy_mcp::config::{Cli, Settings};
use dokploy_mcp::server::McpServer;
use dokploy_mcp::tools;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol, so logs go to stderr
    let default_filter = if cli.debug {
        "info,dokploy_sdk=debug,dokploy_mcp=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let settings = Settings::resolve(&cli)?;
    tracing::info!(
        url = %settings.url,
        auth_scheme = ?settings.auth_scheme,
        removal_verb = settings.removal_verb.as_str(),
        "Dokploy MCP server starting"
    );

    let client = settings.client()?;
    let registry = tools::default_registry(&client).context("Failed to register tools")?;
    tracing::info!("Registered {} tools", registry.list_descriptors().len());

    McpServer::new(registry).start().await
}
