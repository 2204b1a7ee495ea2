#![allow(dead_code)]

use dokploy_mcp::tools::{self, ToolRegistry};
use dokploy_sdk::DokployClient;
use serde_json::{Map, Value};

pub fn client(base_url: &str) -> DokployClient {
    DokployClient::builder()
        .base_url(base_url)
        .api_key("test-secret-key")
        .build()
        .unwrap()
}

pub fn registry(base_url: &str) -> ToolRegistry {
    tools::default_registry(&client(base_url)).unwrap()
}

/// URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn declared_types(schema: &Value) -> Vec<&str> {
    match schema.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(ts)) => ts.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn non_null_branch(schema: &Value) -> Option<&Value> {
    ["anyOf", "oneOf"]
        .iter()
        .filter_map(|k| schema.get(*k).and_then(Value::as_array))
        .flatten()
        .find(|b| b.get("type").and_then(Value::as_str) != Some("null"))
}

/// Smallest value satisfying `schema`.
pub fn sample(schema: &Value) -> Value {
    if let Some(value) = schema.get("const") {
        return value.clone();
    }
    if let Some(first) = schema.get("enum").and_then(Value::as_array).and_then(|e| e.first()) {
        return first.clone();
    }
    if let Some(branch) = non_null_branch(schema) {
        return sample(branch);
    }

    let types = declared_types(schema);
    let kind = types.iter().find(|t| **t != "null").copied().unwrap_or("object");
    match kind {
        "string" => Value::String("x".to_string()),
        "integer" | "number" => {
            let min = schema.get("minimum").and_then(Value::as_u64).unwrap_or(1).max(1);
            Value::from(min)
        }
        "boolean" => Value::Bool(true),
        "array" => Value::Array(Vec::new()),
        _ => Value::Object(required_fields(schema)),
    }
}

/// A value of the wrong type for `schema`.
pub fn wrong_sample(schema: &Value) -> Value {
    if schema.get("enum").is_some() || schema.get("const").is_some() {
        return Value::String("definitely-not-a-member".to_string());
    }
    if let Some(branch) = non_null_branch(schema) {
        return wrong_sample(branch);
    }
    match declared_types(schema).iter().find(|t| **t != "null").copied() {
        Some("string") => Value::from(42),
        _ => Value::String("wrong".to_string()),
    }
}

pub fn required_names(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|r| r.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

fn required_fields(schema: &Value) -> Map<String, Value> {
    let mut fields = Map::new();
    for name in required_names(schema) {
        let property = &schema["properties"][&name];
        fields.insert(name, sample(property));
    }
    fields
}

/// Minimal valid arguments for a tool's input schema.
pub fn minimal_arguments(schema: &Value) -> Value {
    Value::Object(required_fields(schema))
}

pub fn error_of(result: &dokploy_mcp::protocol::CallToolResult) -> &Value {
    &result
        .structured_content
        .as_ref()
        .expect("failure carries structured content")["error"]
}
