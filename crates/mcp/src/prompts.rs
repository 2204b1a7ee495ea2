// Guided prompt templates

use crate::protocol::{GetPromptResult, PromptArgument, PromptDescriptor, PromptMessage, ToolContent};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct PromptArg {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A user-message template with `{{name}}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArg],
    pub template: &'static str,
}

impl PromptTemplate {
    fn descriptor(&self) -> PromptDescriptor {
        PromptDescriptor {
            name: self.name.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            arguments: self
                .arguments
                .iter()
                .map(|a| PromptArgument {
                    name: a.name.to_string(),
                    description: a.description.to_string(),
                    required: a.required,
                })
                .collect(),
        }
    }

    /// Fill in placeholders. Optional arguments that were not given render
    /// as `(not specified)`.
    ///
    /// The template is scanned once, so argument values are inserted
    /// verbatim even when they contain placeholder syntax.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut resolved = HashMap::with_capacity(self.arguments.len());
        for arg in self.arguments {
            let value = match values.get(arg.name).map(|v| v.trim()).filter(|v| !v.is_empty()) {
                Some(value) => value,
                None if arg.required => {
                    return Err(PromptError::MissingArgument {
                        prompt: self.name.to_string(),
                        argument: arg.name.to_string(),
                    })
                }
                None => "(not specified)",
            };
            resolved.insert(arg.name, value);
        }

        let mut text = String::with_capacity(self.template.len());
        let mut rest = self.template;
        while let Some(start) = rest.find("{{") {
            text.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                text.push_str(&rest[start..]);
                rest = "";
                break;
            };
            match resolved.get(&after[..end]) {
                Some(value) => text.push_str(value),
                None => text.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }
        text.push_str(rest);
        Ok(text)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    #[error("Prompt '{prompt}' requires argument '{argument}'")]
    MissingArgument { prompt: String, argument: String },
}

#[derive(Debug, Clone)]
pub struct PromptCatalog {
    prompts: Vec<PromptTemplate>,
}

impl PromptCatalog {
    pub fn new(prompts: Vec<PromptTemplate>) -> Self {
        Self { prompts }
    }

    pub fn list(&self) -> Vec<PromptDescriptor> {
        self.prompts.iter().map(PromptTemplate::descriptor).collect()
    }

    pub fn get(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<GetPromptResult, PromptError> {
        let prompt = self
            .prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PromptError::UnknownPrompt(name.to_string()))?;

        Ok(GetPromptResult {
            description: prompt.description.to_string(),
            messages: vec![PromptMessage {
                role: "user".to_string(),
                content: ToolContent::text(prompt.render(arguments)?),
            }],
        })
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::new(PROMPTS.to_vec())
    }
}

pub const PROMPTS: &[PromptTemplate] = &[
    PromptTemplate {
        name: "deploy-application",
        title: "Deploy an application",
        description: "Create, configure and deploy an application from a git repository",
        arguments: &[
            PromptArg {
                name: "projectId",
                description: "Project to deploy into",
                required: true,
            },
            PromptArg {
                name: "name",
                description: "Name of the new application",
                required: true,
            },
            PromptArg {
                name: "repository",
                description: "Git URL of the source",
                required: true,
            },
            PromptArg {
                name: "branch",
                description: "Branch to build",
                required: false,
            },
            PromptArg {
                name: "domain",
                description: "Hostname to expose the application on",
                required: false,
            },
        ],
        template: "\
Deploy a new application named {{name}} in project {{projectId}}.

1. Call create-application with name {{name}} and projectId {{projectId}}.
2. Call save-git-provider with the new applicationId, customGitUrl {{repository}} \
and customGitBranch {{branch}} (use `main` if not specified).
3. Call save-build-type with buildType `nixpacks` unless the repository has a Dockerfile.
4. Call deploy-application and report the deployment status from list-deployments.
5. Domain: {{domain}}. If one was given, call add-domain with https enabled and \
certificateType `letsencrypt`.

Stop and report the error if any step fails.",
    },
    PromptTemplate {
        name: "provision-database",
        title: "Provision a database",
        description: "Create and start a database service",
        arguments: &[
            PromptArg {
                name: "projectId",
                description: "Project to create the database in",
                required: true,
            },
            PromptArg {
                name: "kind",
                description: "Engine: postgres, mysql, mariadb, mongo or redis",
                required: true,
            },
            PromptArg {
                name: "name",
                description: "Name of the database service",
                required: true,
            },
        ],
        template: "\
Provision a {{kind}} database named {{name}} in project {{projectId}}.

1. Call create-database with kind {{kind}}, name {{name}} and projectId {{projectId}}. \
Generate a strong databasePassword.
2. Call deploy-database with the returned id.
3. Call get-database and report the connection details, without repeating the password.",
    },
    PromptTemplate {
        name: "configure-backups",
        title: "Configure backups",
        description: "Schedule recurring backups of a database",
        arguments: &[
            PromptArg {
                name: "kind",
                description: "Engine of the database",
                required: true,
            },
            PromptArg {
                name: "databaseId",
                description: "ID of the database to back up",
                required: true,
            },
            PromptArg {
                name: "schedule",
                description: "Cron expression",
                required: false,
            },
        ],
        template: "\
Set up backups for the {{kind}} database {{databaseId}}.

1. Call list-destinations and pick a destination (ask if there is more than one).
2. Call create-backup with kind {{kind}}, databaseId {{databaseId}} and schedule \
{{schedule}} (use `0 3 * * *` if not specified).
3. Call run-backup once to verify the destination works, then summarise the schedule.",
    },
];
