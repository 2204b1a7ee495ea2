//! Client-side lookups composed from upstream records.
//!
//! The Dokploy API has no lookup-by-child endpoints, so some operations fetch
//! a parent record and derive what they need from its nested children.

use crate::error::{DokployError, DokployResult};
use serde_json::{Map, Value};
use std::future::Future;

/// Shape of a parent record that nests named groupings of children.
#[derive(Debug, Clone, Copy)]
pub struct Grouping {
    /// Human label of the parent, used in error messages.
    pub parent: &'static str,
    /// Human label of one grouping.
    pub child: &'static str,
    /// Key of the grouping array inside the parent record.
    pub list_key: &'static str,
    /// Key of a grouping's identifier.
    pub id_key: &'static str,
    /// Key of a grouping's display name.
    pub name_key: &'static str,
    /// Key under which a flattened child records its grouping's name.
    pub tag_name_key: &'static str,
}

/// Environments nested inside a project record.
pub const PROJECT_ENVIRONMENTS: Grouping = Grouping {
    parent: "project",
    child: "environment",
    list_key: "environments",
    id_key: "environmentId",
    name_key: "name",
    tag_name_key: "environmentName",
};

/// One named bucket of children inside a grouping.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// Key of the child array inside the grouping.
    pub key: &'static str,
    /// Value written to the `type` tag of every child taken from this bucket.
    pub label: &'static str,
}

/// Predicate for children carrying `"isDefault": true`.
pub fn flagged_default(child: &Value) -> bool {
    child
        .get("isDefault")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Resolve the identifier of the default child of a parent record.
///
/// The parent is fetched once. A 404 from upstream, a non-object record, or
/// a record with no child satisfying `is_default` all yield
/// [`DokployError::NotFound`] naming the parent. Other failures propagate
/// unchanged.
pub async fn resolve_default_child<F, Fut, P>(
    grouping: &Grouping,
    parent_id: &str,
    fetch_parent: F,
    is_default: P,
) -> DokployResult<String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DokployResult<Value>>,
    P: Fn(&Value) -> bool,
{
    let parent = match fetch_parent().await {
        Ok(parent) => parent,
        Err(e) if e.is_upstream_not_found() => {
            return Err(DokployError::NotFound(format!(
                "{} '{}' does not exist",
                grouping.parent, parent_id
            )))
        }
        Err(e) => return Err(e),
    };

    if !parent.is_object() {
        return Err(DokployError::NotFound(format!(
            "{} '{}' does not exist",
            grouping.parent, parent_id
        )));
    }

    parent
        .get(grouping.list_key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .find(|child| is_default(child))
        .and_then(|child| child.get(grouping.id_key))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            DokployError::NotFound(format!(
                "{} '{}' has no default {}",
                grouping.parent, parent_id, grouping.child
            ))
        })
}

/// Concatenate the children of every grouping, tagged with their origin.
///
/// Groupings are walked in the order upstream returned them and, inside
/// each, buckets in the order given. Every child object is cloned and gets
/// the grouping's id, the grouping's name and its bucket label (`type`).
pub fn flatten_groups(parent: &Value, grouping: &Grouping, buckets: &[Bucket]) -> Vec<Value> {
    let mut entries = Vec::new();

    let groups = parent
        .get(grouping.list_key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for group in groups {
        let group_id = group.get(grouping.id_key).cloned().unwrap_or(Value::Null);
        let group_name = group.get(grouping.name_key).cloned().unwrap_or(Value::Null);

        for bucket in buckets {
            let children = group
                .get(bucket.key)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();

            for child in children {
                let Some(fields) = child.as_object() else {
                    continue;
                };
                let mut tagged: Map<String, Value> = fields.clone();
                tagged.insert(grouping.id_key.to_string(), group_id.clone());
                tagged.insert(grouping.tag_name_key.to_string(), group_name.clone());
                tagged.insert("type".to_string(), Value::String(bucket.label.to_string()));
                entries.push(Value::Object(tagged));
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DATABASE_BUCKETS: &[Bucket] = &[
        Bucket { key: "postgres", label: "postgres" },
        Bucket { key: "redis", label: "redis" },
    ];

    fn project() -> Value {
        json!({
            "projectId": "p1",
            "environments": [
                {
                    "environmentId": "e1",
                    "name": "production",
                    "isDefault": false,
                    "postgres": [{"postgresId": "pg1"}, {"postgresId": "pg2"}],
                    "redis": []
                },
                {
                    "environmentId": "e2",
                    "name": "staging",
                    "isDefault": true,
                    "postgres": [],
                    "redis": []
                },
                {
                    "environmentId": "e3",
                    "name": "preview",
                    "postgres": [],
                    "redis": [{"redisId": "r1"}]
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_resolves_flagged_default() {
        let id = resolve_default_child(
            &PROJECT_ENVIRONMENTS,
            "p1",
            || async { Ok(project()) },
            flagged_default,
        )
        .await
        .unwrap();

        assert_eq!(id, "e2");
    }

    #[tokio::test]
    async fn test_missing_default_is_not_found() {
        let mut record = project();
        record["environments"][1]["isDefault"] = json!(false);

        let err = resolve_default_child(
            &PROJECT_ENVIRONMENTS,
            "p1",
            || async { Ok(record) },
            flagged_default,
        )
        .await
        .unwrap_err();

        match err {
            DokployError::NotFound(message) => {
                assert!(message.contains("project 'p1'"));
                assert!(message.contains("default environment"));
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upstream_404_parent_is_not_found() {
        let err = resolve_default_child(
            &PROJECT_ENVIRONMENTS,
            "gone",
            || async { Err(DokployError::from_response(404, "Project not found")) },
            flagged_default,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, DokployError::NotFound(ref m) if m.contains("'gone'")));
    }

    #[tokio::test]
    async fn test_null_parent_is_not_found() {
        let err = resolve_default_child(
            &PROJECT_ENVIRONMENTS,
            "p9",
            || async { Ok(Value::Null) },
            flagged_default,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, DokployError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_other_failures_propagate() {
        let err = resolve_default_child(
            &PROJECT_ENVIRONMENTS,
            "p1",
            || async { Err(DokployError::from_response(500, "boom")) },
            flagged_default,
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_flatten_groups_order_and_tags() {
        let entries = flatten_groups(&project(), &PROJECT_ENVIRONMENTS, DATABASE_BUCKETS);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["postgresId"], "pg1");
        assert_eq!(entries[1]["postgresId"], "pg2");
        assert_eq!(entries[2]["redisId"], "r1");

        assert_eq!(entries[0]["environmentId"], "e1");
        assert_eq!(entries[0]["environmentName"], "production");
        assert_eq!(entries[0]["type"], "postgres");
        assert_eq!(entries[2]["environmentId"], "e3");
        assert_eq!(entries[2]["environmentName"], "preview");
        assert_eq!(entries[2]["type"], "redis");
    }

    #[test]
    fn test_flatten_groups_without_environments() {
        let entries = flatten_groups(&json!({"projectId": "p1"}), &PROJECT_ENVIRONMENTS, DATABASE_BUCKETS);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_flatten_skips_non_object_children() {
        let record = json!({
            "environments": [{"environmentId": "e1", "name": "prod", "postgres": [1, {"postgresId": "pg"}]}]
        });
        let entries = flatten_groups(&record, &PROJECT_ENVIRONMENTS, DATABASE_BUCKETS);
        assert_eq!(entries.len(), 1);
    }
}
