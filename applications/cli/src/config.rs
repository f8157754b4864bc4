/// CLI configuration
use anyhow::{Context, Result};
use gofile_client::{
    ClientConfig, DEFAULT_API_SERVER, DEFAULT_URL_TEMPLATE, DEFAULT_WEBSITE_TOKEN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "gofile.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_url_template")]
    pub url_template: String,

    #[serde(default = "default_api_server")]
    pub api_server: String,

    #[serde(default = "default_website_token")]
    pub website_token: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `gofile.toml` is optional.
    /// `GOFILE_*` variables override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn into_client_config(self) -> ClientConfig {
        let mut client = ClientConfig::new()
            .url_template(self.url_template)
            .api_server(self.api_server)
            .website_token(self.website_token);
        client.token = self.token;
        if let Some(secs) = self.timeout_secs {
            client = client.timeout(Duration::from_secs(secs));
        }
        client
    }
}

// GOFILE_TOKEN, GOFILE_API_SERVER, ...
fn environment() -> config::Environment {
    config::Environment::with_prefix("GOFILE").try_parsing(true)
}

// Default values
fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_api_server() -> String {
    DEFAULT_API_SERVER.to_string()
}

fn default_website_token() -> String {
    DEFAULT_WEBSITE_TOKEN.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            token: None,
            url_template: default_url_template(),
            api_server: default_api_server(),
            website_token: default_website_token(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_library() {
        let config = CliConfig::default().into_client_config();
        let library = ClientConfig::default();

        assert_eq!(config.url_template, library.url_template);
        assert_eq!(config.api_server, library.api_server);
        assert_eq!(config.website_token, library.website_token);
        assert!(config.token.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "token = \"file-token\"").unwrap();
        writeln!(file, "timeout_secs = 15").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.token.as_deref(), Some("file-token"));
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.url_template, DEFAULT_URL_TEMPLATE);

        let client = config.into_client_config();
        assert_eq!(client.token.as_deref(), Some("file-token"));
        assert_eq!(client.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "token = \"file-token\"").unwrap();
        writeln!(file, "api_server = \"api-eu\"").unwrap();

        let vars = config::Map::from([("GOFILE_TOKEN".to_string(), "env-token".to_string())]);
        let config = CliConfig::load_with_env(Some(file.path()), environment().source(Some(vars)))
            .unwrap();

        assert_eq!(config.token.as_deref(), Some("env-token"));
        assert_eq!(config.api_server, "api-eu");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
