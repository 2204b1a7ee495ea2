// Static documentation served as MCP resources

use crate::protocol::{ReadResourceResult, ResourceContents, ResourceDescriptor};

const MARKDOWN: &str = "text/markdown";

/// A fixed markdown document.
#[derive(Debug, Clone, Copy)]
pub struct Document {
    pub uri: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

impl Document {
    fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: self.uri.to_string(),
            name: self.name.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            mime_type: MARKDOWN.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown resource: {0}")]
pub struct UnknownResource(pub String);

/// Read-only set of documents, addressed by URI.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    documents: Vec<Document>,
}

impl ResourceCatalog {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn list(&self) -> Vec<ResourceDescriptor> {
        self.documents.iter().map(Document::descriptor).collect()
    }

    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, UnknownResource> {
        let document = self
            .documents
            .iter()
            .find(|d| d.uri == uri)
            .ok_or_else(|| UnknownResource(uri.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents {
                uri: document.uri.to_string(),
                mime_type: MARKDOWN.to_string(),
                text: document.text.to_string(),
            }],
        })
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::new(DOCUMENTS.to_vec())
    }
}

pub const DOCUMENTS: &[Document] = &[
    Document {
        uri: "dokploy://docs/overview",
        name: "overview",
        title: "Dokploy overview",
        description: "How projects, environments and services fit together",
        text: OVERVIEW,
    },
    Document {
        uri: "dokploy://docs/applications",
        name: "applications",
        title: "Deploying applications",
        description: "Build sources, build types, environment variables and domains",
        text: APPLICATIONS,
    },
    Document {
        uri: "dokploy://docs/databases",
        name: "databases",
        title: "Managing databases",
        description: "Supported engines and the database lifecycle",
        text: DATABASES,
    },
    Document {
        uri: "dokploy://docs/backups",
        name: "backups",
        title: "Backups and restores",
        description: "Destinations, schedules, manual runs and restores",
        text: BACKUPS,
    },
];

const OVERVIEW: &str = "\
# Dokploy

Dokploy is a self-hosted platform for deploying applications and databases
with Docker.

## Resource hierarchy

- **Project**: top-level grouping. Every project has at least one
  environment; the one flagged `isDefault` is used when a tool is not given
  an `environmentId`.
- **Environment**: e.g. `production`, `staging`. Holds services.
- **Service**: an application or a database (postgres, mysql, mariadb,
  mongo, redis).

## Identifiers

Every record has a string id (`projectId`, `environmentId`,
`applicationId`, `postgresId`, ...). Listing tools return them; pass them
back verbatim.

## Errors

Tool failures carry `structuredContent.error.kind`:

| kind | meaning |
|------|---------|
| `validation` | arguments did not match the input schema, nothing was sent |
| `not_found` | a project or its default environment could not be found |
| `upstream` | Dokploy answered with an error status (`status`, `message`) |
| `transport` | Dokploy could not be reached |

Nothing is retried automatically.
";

const APPLICATIONS: &str = "\
# Applications

1. `create-application` with `name` and `projectId`.
2. Choose a source:
   - `save-docker-provider` for a prebuilt image, or
   - `save-git-provider` for a git URL and branch.
3. For git sources pick a build with `save-build-type`
   (`dockerfile`, `nixpacks`, `heroku_buildpacks`, `paketo_buildpacks`,
   `static`, `railpack`).
4. Set variables with `update-env-vars` (one `KEY=value` per line).
5. `deploy-application`, then follow progress with `list-deployments`
   and `get-logs`.
6. Expose it with `add-domain` or `generate-domain`.

Environment variable changes apply on the next deployment.
";

const DATABASES: &str = "\
# Databases

Engines: `postgres`, `mysql`, `mariadb`, `mongo`, `redis`. Every database
tool takes a `kind` plus the engine-specific id as `databaseId`.

- `create-database` creates the service; `deploy-database` starts the
  container for the first time.
- `start-database` / `stop-database` toggle a deployed database.
- `list-databases` walks every environment of a project and tags each
  entry with `environmentId`, `environmentName` and `type` (the engine).

Redis ignores `databaseName` and `databaseUser`. MySQL and MariaDB also
take `databaseRootPassword`.
";

const BACKUPS: &str = "\
# Backups

Backups are written to an S3-compatible destination.

1. `list-destinations` to find a `destinationId`.
2. `create-backup` with a cron `schedule` (e.g. `0 3 * * *`), a `prefix`
   folder and the `database` name to dump.
3. `run-backup` triggers a schedule immediately.
4. `restore-backup` restores a file from the destination into a database.
   Existing data is overwritten.

`list-backups` shows the schedules configured for one database.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_document() {
        let catalog = ResourceCatalog::default();
        let uris: Vec<String> = catalog.list().into_iter().map(|d| d.uri).collect();

        assert_eq!(
            uris,
            vec![
                "dokploy://docs/overview",
                "dokploy://docs/applications",
                "dokploy://docs/databases",
                "dokploy://docs/backups",
            ]
        );
    }

    #[test]
    fn test_read_known_document() {
        let result = ResourceCatalog::default().read("dokploy://docs/backups").unwrap();
        assert_eq!(result.contents.len(), 1);
        assert_eq!(result.contents[0].mime_type, "text/markdown");
        assert!(result.contents[0].text.starts_with("# Backups"));
    }

    #[test]
    fn test_read_unknown_document() {
        let err = ResourceCatalog::default().read("dokploy://docs/nope").unwrap_err();
        assert_eq!(err, UnknownResource("dokploy://docs/nope".to_string()));
    }
}
