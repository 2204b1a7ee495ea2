//! Resource paths of the Dokploy API, relative to `{base_url}/api`.
//!
//! Paths are pinned to the upstream release this crate tracks. Deletion of
//! applications and databases depends on [`RemovalVerb`] instead.

use crate::config::RemovalVerb;

pub const PROJECT_ALL: &str = "/project.all";
pub const PROJECT_ONE: &str = "/project.one";
pub const PROJECT_CREATE: &str = "/project.create";
pub const PROJECT_UPDATE: &str = "/project.update";
pub const PROJECT_REMOVE: &str = "/project.remove";

pub const ENVIRONMENT_BY_PROJECT: &str = "/environment.byProjectId";
pub const ENVIRONMENT_CREATE: &str = "/environment.create";
pub const ENVIRONMENT_REMOVE: &str = "/environment.remove";

pub const APPLICATION_ONE: &str = "/application.one";
pub const APPLICATION_CREATE: &str = "/application.create";
pub const APPLICATION_UPDATE: &str = "/application.update";
pub const APPLICATION_DEPLOY: &str = "/application.deploy";
pub const APPLICATION_REDEPLOY: &str = "/application.redeploy";
pub const APPLICATION_START: &str = "/application.start";
pub const APPLICATION_STOP: &str = "/application.stop";
pub const APPLICATION_SAVE_ENVIRONMENT: &str = "/application.saveEnvironment";
pub const APPLICATION_SAVE_BUILD_TYPE: &str = "/application.saveBuildType";
pub const APPLICATION_SAVE_DOCKER_PROVIDER: &str = "/application.saveDockerProvider";
// Upstream spelling.
pub const APPLICATION_SAVE_GIT_PROVIDER: &str = "/application.saveGitProdiver";
pub const APPLICATION_READ_LOGS: &str = "/application.readLogs";

pub const DEPLOYMENT_ALL: &str = "/deployment.all";

pub const DOMAIN_BY_APPLICATION: &str = "/domain.byApplicationId";
pub const DOMAIN_CREATE: &str = "/domain.create";
pub const DOMAIN_DELETE: &str = "/domain.delete";
pub const DOMAIN_GENERATE: &str = "/domain.generateDomain";

pub const BACKUP_CREATE: &str = "/backup.create";
pub const BACKUP_REMOVE: &str = "/backup.remove";
pub const BACKUP_RESTORE: &str = "/backup.restore";
pub const DESTINATION_ALL: &str = "/destination.all";

pub const SERVER_ALL: &str = "/server.all";
pub const SERVER_ONE: &str = "/server.one";
pub const SERVER_CREATE: &str = "/server.create";
pub const SERVER_REMOVE: &str = "/server.remove";

pub const USER_ALL: &str = "/user.all";
pub const USER_ONE: &str = "/user.one";

pub const REGISTRY_ALL: &str = "/registry.all";
pub const REGISTRY_CREATE: &str = "/registry.create";
pub const REGISTRY_REMOVE: &str = "/registry.remove";

pub const SCHEDULE_LIST: &str = "/schedule.list";
pub const SCHEDULE_CREATE: &str = "/schedule.create";
pub const SCHEDULE_RUN: &str = "/schedule.runManually";
pub const SCHEDULE_DELETE: &str = "/schedule.delete";

pub const MOUNT_CREATE: &str = "/mounts.create";
pub const MOUNT_REMOVE: &str = "/mounts.remove";

pub const PORT_CREATE: &str = "/port.create";
pub const PORT_DELETE: &str = "/port.delete";

pub const CERTIFICATE_ALL: &str = "/certificates.all";
pub const CERTIFICATE_CREATE: &str = "/certificates.create";
pub const CERTIFICATE_REMOVE: &str = "/certificates.remove";

pub const NOTIFICATION_ALL: &str = "/notification.all";
pub const NOTIFICATION_CREATE_SLACK: &str = "/notification.createSlack";
pub const NOTIFICATION_REMOVE: &str = "/notification.remove";

pub const SSH_KEY_ALL: &str = "/sshKey.all";
pub const SSH_KEY_CREATE: &str = "/sshKey.create";
pub const SSH_KEY_GENERATE: &str = "/sshKey.generate";
pub const SSH_KEY_REMOVE: &str = "/sshKey.remove";

pub const GIT_PROVIDER_ALL: &str = "/gitProvider.getAll";

/// Path of `{resource}.{verb}` for a resource prefix such as `application`
/// or `postgres`.
pub fn resource_verb(resource: &str, verb: &str) -> String {
    format!("/{}.{}", resource, verb)
}

/// Deletion path for a resource, honouring the configured verb.
pub fn removal(resource: &str, verb: RemovalVerb) -> String {
    resource_verb(resource, verb.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_follows_verb() {
        assert_eq!(removal("application", RemovalVerb::Delete), "/application.delete");
        assert_eq!(removal("postgres", RemovalVerb::Remove), "/postgres.remove");
    }

    #[test]
    fn test_resource_verb() {
        assert_eq!(resource_verb("redis", "deploy"), "/redis.deploy");
    }
}
