//! Basic SDK usage example.
//!
//! Lists projects, then the applications and databases of the first one.
//!
//! Run with:
//! DOKPLOY_URL=https://dokploy.example.com DOKPLOY_API_KEY=... cargo run --example basic_usage

use dokploy_sdk::api::projects::ProjectIdRequest;
use dokploy_sdk::{DokployClient, DokployResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> DokployResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let client = DokployClient::builder()
        .base_url(std::env::var("DOKPLOY_URL").unwrap_or_else(|_| "http://localhost:3000".into()))
        .api_key(std::env::var("DOKPLOY_API_KEY").unwrap_or_default())
        .timeout(Duration::from_secs(30))
        .debug(true)
        .build()?;

    println!("Listing projects...");
    let projects = client.projects().list().await?;
    let projects = projects.as_array().cloned().unwrap_or_default();
    println!("Found {} projects", projects.len());

    for project in &projects {
        println!(
            "  {} ({})",
            project["name"].as_str().unwrap_or("?"),
            project["projectId"].as_str().unwrap_or("?")
        );
    }

    let Some(project_id) = projects
        .first()
        .and_then(|p| p["projectId"].as_str())
        .map(str::to_string)
    else {
        return Ok(());
    };

    let request = ProjectIdRequest { project_id };

    match client.projects().default_environment_id(&request.project_id).await {
        Ok(id) => println!("\nDefault environment: {}", id),
        Err(e) => println!("\nNo default environment: {}", e),
    }

    println!("\nApplications:");
    for app in client.applications().list(&request).await? {
        println!(
            "  [{}] {} ({})",
            app["environmentName"].as_str().unwrap_or("?"),
            app["name"].as_str().unwrap_or("?"),
            app["applicationStatus"].as_str().unwrap_or("unknown")
        );
    }

    println!("\nDatabases:");
    for db in client.databases().list(&request).await? {
        println!(
            "  [{}] {} {}",
            db["environmentName"].as_str().unwrap_or("?"),
            db["type"].as_str().unwrap_or("?"),
            db["name"].as_str().unwrap_or("?")
        );
    }

    Ok(())
}
