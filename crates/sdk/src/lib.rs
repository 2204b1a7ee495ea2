//! # Dokploy SDK
//!
//! Typed Rust client for the Dokploy deployment platform API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dokploy_sdk::{DokployClient, DokployResult};
//! use dokploy_sdk::api::projects::CreateProjectRequest;
//!
//! #[tokio::main]
//! async fn main() -> DokployResult<()> {
//!     let client = DokployClient::builder()
//!         .base_url("https://dokploy.example.com")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let projects = client.projects().list().await?;
//!     println!("{}", projects);
//!
//!     let created = client
//!         .projects()
//!         .create(&CreateProjectRequest {
//!             name: "demo".to_string(),
//!             description: String::new(),
//!         })
//!         .await?;
//!     println!("Created {}", created["projectId"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! Every call issues exactly one HTTP request (two for operations that first
//! resolve a project's default environment) and never retries. Non-2xx
//! answers surface as [`DokployError::Upstream`], network failures as
//! [`DokployError::Transport`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod paths;
pub mod transport;

pub use client::{DokployClient, DokployClientBuilder};
pub use config::{AuthScheme, ClientConfig, RemovalVerb, DEFAULT_BASE_URL};
pub use error::{DokployError, DokployResult};
