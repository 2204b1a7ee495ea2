// Typed tool adapter: argument struct in, Dokploy call out

use crate::protocol::{CallToolResult, ToolDescriptor};
use crate::tools::registry::{Tool, ToolTier};
use crate::validate::{input_schema_for, validate, ValidationError};
use dokploy_sdk::{DokployClient, DokployError, DokployResult};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// What a successful handler hands back to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub text: String,
    pub data: Option<Value>,
}

impl ToolOutput {
    /// Relay an upstream value as pretty JSON text plus structured content.
    pub fn json(value: Value) -> Self {
        Self {
            text: pretty(&value),
            data: Some(value),
        }
    }

    pub fn list(items: Vec<Value>) -> Self {
        Self::json(Value::Array(items))
    }

    /// A one-line summary followed by the upstream answer, if there was one.
    pub fn done(summary: impl Into<String>, value: Value) -> Self {
        let summary = summary.into();
        let text = if value.is_null() {
            summary
        } else {
            format!("{}\n\n{}", summary, pretty(&value))
        };
        Self {
            text,
            data: Some(value),
        }
    }

    pub fn into_result(self) -> CallToolResult {
        let structured = self.data.map(|data| match data {
            Value::Object(_) => data,
            Value::Null => Value::Object(Map::new()),
            other => json!({ "result": other }),
        });
        CallToolResult::success(self.text, structured)
    }
}

fn pretty(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Failure result for arguments that do not match the input schema.
pub fn validation_failure(err: &ValidationError) -> CallToolResult {
    CallToolResult::failure(
        err.to_string(),
        json!({
            "error": {
                "kind": "validation",
                "message": err.to_string(),
                "violations": err.violations,
            }
        }),
    )
}

/// Failure result for an error raised while talking to Dokploy.
pub fn dokploy_failure(err: &DokployError) -> CallToolResult {
    let detail = match err {
        DokployError::Upstream { status, message } => json!({
            "kind": err.kind(),
            "status": status,
            "message": message,
        }),
        DokployError::Transport(source) => json!({
            "kind": err.kind(),
            "reason": source.to_string(),
        }),
        other => json!({
            "kind": other.kind(),
            "message": other.to_string(),
        }),
    };
    CallToolResult::failure(err.to_string(), json!({ "error": detail }))
}

/// Binds an argument type and an async handler into a [`Tool`].
///
/// The input schema is generated once from `A` and is the same document
/// arguments are validated against.
pub struct TypedTool<A, F> {
    name: &'static str,
    title: &'static str,
    description: &'static str,
    tier: ToolTier,
    input_schema: Value,
    client: DokployClient,
    handler: F,
    _args: PhantomData<fn() -> A>,
}

impl<A, F, Fut> TypedTool<A, F>
where
    A: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(DokployClient, A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = DokployResult<ToolOutput>> + Send + 'static,
{
    pub fn new(
        client: &DokployClient,
        name: &'static str,
        title: &'static str,
        description: &'static str,
        tier: ToolTier,
        handler: F,
    ) -> Self {
        Self {
            name,
            title,
            description,
            tier,
            input_schema: input_schema_for::<A>(),
            client: client.clone(),
            handler,
            _args: PhantomData,
        }
    }

    pub fn shared(self) -> Arc<dyn Tool> {
        Arc::new(self)
    }

    fn parse(&self, arguments: Value) -> Result<A, ValidationError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        validate(&self.input_schema, &arguments)?;
        serde_json::from_value(arguments)
            .map_err(|e| ValidationError::single("(arguments)", e.to_string()))
    }
}

#[async_trait::async_trait]
impl<A, F, Fut> Tool for TypedTool<A, F>
where
    A: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(DokployClient, A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = DokployResult<ToolOutput>> + Send + 'static,
{
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema.clone(),
            annotations: self.tier.annotations(),
        }
    }

    async fn execute(&self, arguments: Value) -> CallToolResult {
        let args = match self.parse(arguments) {
            Ok(args) => args,
            Err(err) => {
                tracing::debug!(tool = self.name, error = %err, "Rejected tool arguments");
                return validation_failure(&err);
            }
        };

        match (self.handler)(self.client.clone(), args).await {
            Ok(output) => output.into_result(),
            Err(err) => {
                tracing::warn!(tool = self.name, kind = err.kind(), error = %err, "Tool call failed");
                dokploy_failure(&err)
            }
        }
    }

    fn tier(&self) -> ToolTier {
        self.tier
    }
}
