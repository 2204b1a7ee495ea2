// Argument validation against a tool's declared input schema

use schemars::generate::SchemaSettings;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Map, Value};

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Dotted path of the offending field, `(arguments)` for the root.
    pub field: String,
    pub message: String,
}

/// Arguments that do not satisfy a tool's input schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Invalid arguments: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Names of the violated fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

const ROOT: &str = "(arguments)";

/// Input schema for an argument type, with subschemas inlined so that the
/// advertised contract and the validator see the same document.
pub fn input_schema_for<A: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft2020_12()
        .with(|s| s.inline_subschemas = true)
        .into_generator();
    let mut schema = generator.into_root_schema_for::<A>().to_value();

    if let Some(fields) = schema.as_object_mut() {
        fields.remove("$schema");
        fields.remove("title");
        fields
            .entry("type")
            .or_insert_with(|| Value::String("object".to_string()));
        fields
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
    }
    schema
}

/// Check `value` against `schema`, collecting every violation.
pub fn validate(schema: &Value, value: &Value) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    check(schema, value, "", &mut violations);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

fn field_name(path: &str) -> String {
    if path.is_empty() {
        ROOT.to_string()
    } else {
        path.to_string()
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "null" => value.is_null(),
        "boolean" => value.is_boolean(),
        "string" => value.is_string(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "number" => value.is_number(),
        "integer" => matches!(value, Value::Number(n) if n.is_i64() || n.is_u64()),
        _ => true,
    }
}

fn push(out: &mut Vec<FieldViolation>, path: &str, message: String) {
    out.push(FieldViolation {
        field: field_name(path),
        message,
    });
}

fn check(schema: &Value, value: &Value, path: &str, out: &mut Vec<FieldViolation>) {
    let rules = match schema {
        Value::Bool(true) => return,
        Value::Bool(false) => {
            push(out, path, "is not allowed".to_string());
            return;
        }
        Value::Object(rules) => rules,
        _ => return,
    };

    for key in ["anyOf", "oneOf"] {
        if let Some(branches) = rules.get(key).and_then(Value::as_array) {
            if !check_branches(branches, value, path, out) {
                return;
            }
        }
    }

    if let Some(expected) = rules.get("const") {
        if expected != value {
            push(out, path, format!("must be {}", expected));
            return;
        }
    }

    if let Some(types) = rules.get("type") {
        let allowed: Vec<&str> = match types {
            Value::String(t) => vec![t.as_str()],
            Value::Array(ts) => ts.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };
        if !allowed.is_empty() && !allowed.iter().any(|t| type_matches(t, value)) {
            push(
                out,
                path,
                format!("expected {}, got {}", allowed.join(" or "), type_name(value)),
            );
            return;
        }
        // Nullable enums list null in `type` but not always in `enum`.
        if value.is_null() && allowed.contains(&"null") {
            return;
        }
    }

    if let Some(options) = rules.get("enum").and_then(Value::as_array) {
        if !options.contains(value) {
            let listed: Vec<String> = options
                .iter()
                .map(|o| match o {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            push(out, path, format!("must be one of: {}", listed.join(", ")));
            return;
        }
    }

    if let Some(n) = value.as_f64() {
        if let Some(min) = rules.get("minimum").and_then(Value::as_f64) {
            if n < min {
                push(out, path, format!("must be at least {}", min));
            }
        }
        if let Some(max) = rules.get("maximum").and_then(Value::as_f64) {
            if n > max {
                push(out, path, format!("must be at most {}", max));
            }
        }
    }

    if let Value::Object(fields) = value {
        if let Some(required) = rules.get("required").and_then(Value::as_array) {
            for name in required.iter().filter_map(Value::as_str) {
                if !fields.contains_key(name) {
                    push(out, &join(path, name), "is required".to_string());
                }
            }
        }
        if let Some(properties) = rules.get("properties").and_then(Value::as_object) {
            for (name, sub) in properties {
                if let Some(field) = fields.get(name) {
                    check(sub, field, &join(path, name), out);
                }
            }
        }
    }

    if let (Value::Array(items), Some(item_schema)) = (value, rules.get("items")) {
        for (i, item) in items.iter().enumerate() {
            check(item_schema, item, &format!("{}[{}]", field_name(path), i), out);
        }
    }
}

/// Returns true when checking may continue with the remaining keywords.
fn check_branches(
    branches: &[Value],
    value: &Value,
    path: &str,
    out: &mut Vec<FieldViolation>,
) -> bool {
    let mut reports = Vec::with_capacity(branches.len());
    for branch in branches {
        let mut local = Vec::new();
        check(branch, value, path, &mut local);
        if local.is_empty() {
            return true;
        }
        reports.push((branch, local));
    }

    // Option<T> renders as [T, null]; report the T branch directly.
    let non_null: Vec<_> = reports
        .into_iter()
        .filter(|(branch, _)| branch.get("type").and_then(Value::as_str) != Some("null"))
        .collect();
    if let [(_, violations)] = non_null.as_slice() {
        out.extend(violations.iter().cloned());
    } else {
        push(out, path, "does not match any allowed shape".to_string());
    }
    false
}
