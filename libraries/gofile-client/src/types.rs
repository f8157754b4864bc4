//! Types for Gofile API requests and client configuration.

use crate::error::{GofileError, Result};
use reqwest::multipart::Form;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default host template; `{server}` is replaced with a server name.
pub const DEFAULT_URL_TEMPLATE: &str = "https://{server}.gofile.io";

/// Server name of the generic API host.
pub const DEFAULT_API_SERVER: &str = "api";

/// Value sent as `websiteToken` when fetching content.
pub const DEFAULT_WEBSITE_TOKEN: &str = "12345";

pub(crate) const SERVER_PLACEHOLDER: &str = "{server}";

/// Configuration for connecting to Gofile.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host template (e.g., "https://{server}.gofile.io")
    pub url_template: String,
    /// Server name substituted into the template for control operations
    pub api_server: String,
    /// Account token; a new account is created when absent
    pub token: Option<String>,
    /// Sent as `websiteToken` on content lookups
    pub website_token: String,
    /// Whole-request timeout, none by default
    pub timeout: Option<Duration>,
    /// Connect timeout, none by default
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            api_server: DEFAULT_API_SERVER.to_string(),
            token: None,
            website_token: DEFAULT_WEBSITE_TOKEN.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at gofile.io with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with an existing account token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    pub fn api_server(mut self, server: impl Into<String>) -> Self {
        self.api_server = server.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn website_token(mut self, website_token: impl Into<String>) -> Self {
        self.website_token = website_token.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Validate the host template and strip trailing slashes.
    pub(crate) fn normalized(self) -> Result<Self> {
        let url_template = self.url_template.trim().trim_end_matches('/').to_string();

        if url_template.is_empty() {
            return Err(GofileError::InvalidUrl("URL template cannot be empty".into()));
        }
        if !url_template.starts_with("http://") && !url_template.starts_with("https://") {
            return Err(GofileError::InvalidUrl(
                "URL template must start with http:// or https://".into(),
            ));
        }
        if !url_template.contains(SERVER_PLACEHOLDER) {
            return Err(GofileError::InvalidUrl(format!(
                "URL template must contain {}",
                SERVER_PLACEHOLDER
            )));
        }
        if self.api_server.trim().is_empty() {
            return Err(GofileError::InvalidUrl("API server cannot be empty".into()));
        }

        let api_url = host_url(&url_template, self.api_server.trim());
        url::Url::parse(&api_url)
            .map_err(|e| GofileError::InvalidUrl(format!("{}: {}", api_url, e)))?;

        Ok(Self {
            url_template,
            api_server: self.api_server.trim().to_string(),
            ..self
        })
    }
}

/// Render the base URL of `server` from a host template.
pub(crate) fn host_url(template: &str, server: &str) -> String {
    template.replace(SERVER_PLACEHOLDER, server)
}

// =============================================================================
// Upload Types
// =============================================================================

/// Optional fields sent along with an uploaded file.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub folder_id: Option<String>,
    pub description: Option<String>,
    pub password: Option<String>,
    pub tags: Option<String>,
    pub expire: Option<String>,
}

impl UploadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload into this folder instead of a new one.
    pub fn folder_id(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Comma-separated tag list.
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Expiry as a unix timestamp.
    pub fn expire(mut self, expire: impl Into<String>) -> Self {
        self.expire = Some(expire.into());
        self
    }

    /// Add the fields that are set; unset fields are left out of the form.
    pub(crate) fn apply(&self, mut form: Form) -> Form {
        let fields = [
            ("folderId", &self.folder_id),
            ("description", &self.description),
            ("password", &self.password),
            ("tags", &self.tags),
            ("expire", &self.expire),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                form = form.text(name, value.clone());
            }
        }
        form
    }
}

// =============================================================================
// Folder Types
// =============================================================================

/// Folder settings accepted by `setFolderOption`.
///
/// Names the API documents get their own variant; any other name is
/// carried in `Other` and sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOption {
    /// "true" or "false"
    Public,
    Password,
    Description,
    /// Unix timestamp
    Expire,
    /// Comma-separated tag list
    Tags,
    Other(String),
}

impl FolderOption {
    pub fn as_str(&self) -> &str {
        match self {
            FolderOption::Public => "public",
            FolderOption::Password => "password",
            FolderOption::Description => "description",
            FolderOption::Expire => "expire",
            FolderOption::Tags => "tags",
            FolderOption::Other(name) => name,
        }
    }
}

impl fmt::Display for FolderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FolderOption {
    fn from(name: &str) -> Self {
        match name {
            "public" => FolderOption::Public,
            "password" => FolderOption::Password,
            "description" => FolderOption::Description,
            "expire" => FolderOption::Expire,
            "tags" => FolderOption::Tags,
            other => FolderOption::Other(other.to_string()),
        }
    }
}

impl FromStr for FolderOption {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Self::from(s))
    }
}

// =============================================================================
// Content Types
// =============================================================================

/// One or more content IDs, sent comma-joined as `contentsId`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentIds(Vec<String>);

impl ContentIds {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl From<&str> for ContentIds {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for ContentIds {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<String>> for ContentIds {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<&[&str]> for ContentIds {
    fn from(ids: &[&str]) -> Self {
        ids.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for ContentIds {
    fn from(ids: [&str; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ContentIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
