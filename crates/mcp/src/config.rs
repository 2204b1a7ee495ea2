// Startup configuration: defaults, optional TOML file, then env/flags

use anyhow::{Context, Result};
use clap::Parser;
use dokploy_sdk::{AuthScheme, DokployClient, RemovalVerb, DEFAULT_BASE_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dokploy-mcp")]
#[command(version, about = "MCP server for the Dokploy deployment platform", long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "DOKPLOY_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the Dokploy instance
    #[arg(long, env = "DOKPLOY_URL")]
    pub url: Option<String>,

    /// API key created under Settings > Profile > API
    #[arg(long, env = "DOKPLOY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log every request to Dokploy and every failure
    #[arg(long, env = "DOKPLOY_DEBUG")]
    pub debug: bool,

    /// Credential header: `api-key` (x-api-key) or `bearer`
    #[arg(long, env = "DOKPLOY_AUTH_SCHEME")]
    pub auth_scheme: Option<String>,

    /// Verb of the application/database deletion endpoints: `delete` or `remove`
    #[arg(long, env = "DOKPLOY_REMOVAL_VERB")]
    pub removal_verb: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "DOKPLOY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Contents of the optional configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub debug: Option<bool>,
    pub auth_scheme: Option<AuthScheme>,
    pub removal_verb: Option<RemovalVerb>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

/// Fully resolved settings, ready to build a client from.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub api_key: String,
    pub debug: bool,
    pub auth_scheme: AuthScheme,
    pub removal_verb: RemovalVerb,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Merge the layers. Flags and environment win over the file, the file
    /// wins over built-in defaults.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let api_key = cli
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|key| !key.trim().is_empty())
            .context("No Dokploy API key configured: set DOKPLOY_API_KEY, --api-key or `api_key` in the config file")?;

        let auth_scheme = match &cli.auth_scheme {
            Some(raw) => raw.parse::<AuthScheme>()?,
            None => file.auth_scheme.unwrap_or_default(),
        };
        let removal_verb = match &cli.removal_verb {
            Some(raw) => raw.parse::<RemovalVerb>()?,
            None => file.removal_verb.unwrap_or_default(),
        };

        Ok(Self {
            url: cli
                .url
                .clone()
                .or(file.url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            debug: cli.debug || file.debug.unwrap_or(false),
            auth_scheme,
            removal_verb,
            timeout: cli.timeout_secs.or(file.timeout_secs).map(Duration::from_secs),
        })
    }

    pub fn client(&self) -> Result<DokployClient> {
        let mut builder = DokployClient::builder()
            .base_url(&self.url)
            .api_key(&self.api_key)
            .debug(self.debug)
            .auth_scheme(self.auth_scheme)
            .removal_verb(self.removal_verb);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().context("Failed to create Dokploy client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli_with_key() -> Cli {
        Cli {
            api_key: Some("cli-key".to_string()),
            ..Default::default()
        }
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&cli_with_key()).unwrap();

        assert_eq!(settings.url, DEFAULT_BASE_URL);
        assert_eq!(settings.api_key, "cli-key");
        assert!(!settings.debug);
        assert_eq!(settings.auth_scheme, AuthScheme::ApiKey);
        assert_eq!(settings.removal_verb, RemovalVerb::Delete);
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Settings::resolve(&Cli::default()).unwrap_err();
        assert!(err.to_string().contains("DOKPLOY_API_KEY"));

        let cli = Cli {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn test_file_layer() {
        let file = config_file(
            r#"
url = "https://dokploy.example.com"
api_key = "file-key"
debug = true
auth_scheme = "bearer"
removal_verb = "remove"
timeout_secs = 30
"#,
        );
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.url, "https://dokploy.example.com");
        assert_eq!(settings.api_key, "file-key");
        assert!(settings.debug);
        assert_eq!(settings.auth_scheme, AuthScheme::Bearer);
        assert_eq!(settings.removal_verb, RemovalVerb::Remove);
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file(
            r#"
url = "https://file.example.com"
api_key = "file-key"
auth_scheme = "bearer"
"#,
        );
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            url: Some("https://flag.example.com".to_string()),
            api_key: Some("flag-key".to_string()),
            auth_scheme: Some("api-key".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.url, "https://flag.example.com");
        assert_eq!(settings.api_key, "flag-key");
        assert_eq!(settings.auth_scheme, AuthScheme::ApiKey);
    }

    #[test]
    fn test_unknown_file_key_rejected() {
        let file = config_file("api_key = \"k\"\nretries = 3\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn test_invalid_auth_scheme_flag() {
        let cli = Cli {
            auth_scheme: Some("basic".to_string()),
            ..cli_with_key()
        };
        let err = Settings::resolve(&cli).unwrap_err();
        assert!(err.to_string().contains("basic"));
    }

    #[test]
    fn test_client_from_settings() {
        let cli = Cli {
            url: Some("https://dokploy.example.com".to_string()),
            removal_verb: Some("remove".to_string()),
            ..cli_with_key()
        };
        let client = Settings::resolve(&cli).unwrap().client().unwrap();

        assert_eq!(client.config().base_url.as_str(), "https://dokploy.example.com/");
        assert_eq!(client.config().removal_verb, RemovalVerb::Remove);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "dokploy-mcp",
            "--url",
            "https://dokploy.example.com",
            "--api-key",
            "k",
            "--debug",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("https://dokploy.example.com"));
        assert!(cli.debug);
        assert_eq!(cli.timeout_secs, Some(5));
    }
}
