// MCP (Model Context Protocol) server for the Dokploy deployment platform.
// Exposes the Dokploy API as tools, plus static docs and prompt templates,
// to agent clients over stdio.

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;
pub mod validate;

pub use server::McpServer;
