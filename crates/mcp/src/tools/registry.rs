// Tool trait and the registry the dispatcher consults

use crate::protocol::{CallToolResult, ToolAnnotations, ToolDescriptor};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool descriptor for MCP
    fn descriptor(&self) -> ToolDescriptor;

    /// Execute the tool with given arguments.
    ///
    /// Failures are reported inside the result (`isError: true`), never as
    /// protocol errors.
    async fn execute(&self, arguments: Value) -> CallToolResult;

    /// Get the tool's tier
    fn tier(&self) -> ToolTier {
        ToolTier::ReadOnly
    }
}

/// How much a tool can change on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolTier {
    /// Listing and inspection
    ReadOnly,
    /// Creates or reconfigures resources
    Write,
    /// Deletes resources or interrupts running services
    Destructive,
}

impl ToolTier {
    pub fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations {
            read_only_hint: *self == ToolTier::ReadOnly,
            destructive_hint: *self == ToolTier::Destructive,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Tool registry for managing available tools
///
/// Names are unique and listing follows registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, refusing a second tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.descriptor().name;
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateTool(name));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index.get(name).map(|&i| self.tools[i].clone())
    }

    /// All descriptors, in registration order.
    pub fn list_descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    /// Invoke a tool by name.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<CallToolResult, RegistryError> {
        let tool = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))?;
        Ok(tool.execute(arguments).await)
    }
}
