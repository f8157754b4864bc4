//! Main Gofile client.

use crate::account::AccountClient;
use crate::content::ContentClient;
use crate::error::Result;
use crate::folder::FolderClient;
use crate::password::Password;
use crate::types::{host_url, ClientConfig, ContentIds, FolderOption, UploadOptions};
use crate::upload::UploadClient;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Client for the gofile.io API.
///
/// Every operation issues one request, except [`upload_file`](Self::upload_file)
/// (server lookup, then upload) and [`create_folder`](Self::create_folder)
/// without a parent (root folder lookup, then create).
///
/// # Example
///
/// ```ignore
/// use gofile_client::{ClientConfig, GofileClient, UploadOptions};
///
/// // No token: a guest account is created
/// let client = GofileClient::new(ClientConfig::new()).await?;
///
/// let uploaded = client
///     .upload_file("report.pdf".as_ref(), &UploadOptions::new().description("Q3"))
///     .await?;
/// println!("Uploaded to {}", uploaded["downloadPage"]);
/// ```
#[derive(Clone)]
pub struct GofileClient {
    http: Client,
    api_url: String,
    url_template: String,
    website_token: String,
    token: String,
}

impl GofileClient {
    /// Create a new client with the given configuration.
    ///
    /// When the config carries no token, a new account is created and its
    /// token adopted before this returns.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let config = config.normalized()?;

        let mut builder = Client::builder().user_agent(format!(
            "gofile-client/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build()?;

        let api_url = host_url(&config.url_template, &config.api_server);

        let token = match config.token {
            Some(token) => token,
            None => {
                debug!("No token configured, creating an account");
                let token = AccountClient::new(&http, &api_url, "")
                    .create_account()
                    .await?;
                info!("Using token of newly created account");
                token
            }
        };

        Ok(Self {
            http,
            api_url,
            url_template: config.url_template,
            website_token: config.website_token,
            token,
        })
    }

    /// The account token sent with every authenticated call.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Base URL of the generic API host.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Base URL of a storage server.
    pub fn server_url(&self, server: &str) -> String {
        host_url(&self.url_template, server)
    }

    /// Get an account client.
    pub fn account(&self) -> AccountClient<'_> {
        AccountClient::new(&self.http, &self.api_url, &self.token)
    }

    /// Get an upload client.
    pub fn uploads(&self) -> UploadClient<'_> {
        UploadClient::new(&self.http, &self.api_url, &self.url_template, &self.token)
    }

    /// Get a content client.
    pub fn contents(&self) -> ContentClient<'_> {
        ContentClient::new(&self.http, &self.api_url, &self.token, &self.website_token)
    }

    /// Get a folder client.
    pub fn folders(&self) -> FolderClient<'_> {
        FolderClient::new(&self.http, &self.api_url, &self.token)
    }

    /// Create a new account. The client keeps using its own token.
    pub async fn create_account(&self) -> Result<String> {
        self.account().create_account().await
    }

    /// Get the best server available to receive files.
    pub async fn get_server(&self) -> Result<String> {
        self.uploads().get_server().await
    }

    /// Upload a file to the best available server.
    pub async fn upload_file(&self, file_path: &Path, options: &UploadOptions) -> Result<Value> {
        self.uploads().upload_file(file_path, options).await
    }

    /// Get the details of a file or folder.
    pub async fn get_content(&self, content_id: &str, password: Option<&Password>) -> Result<Value> {
        self.contents().get_content(content_id, password).await
    }

    /// Create a folder.
    ///
    /// Without `parent_folder_id` the folder goes into the account's root
    /// folder, which costs an extra account lookup first.
    pub async fn create_folder(
        &self,
        folder_name: &str,
        parent_folder_id: Option<&str>,
    ) -> Result<()> {
        let parent = match parent_folder_id {
            Some(parent) => parent.to_string(),
            None => self.account().root_folder().await?,
        };

        self.folders().create_folder(folder_name, &parent).await
    }

    /// Set an option on a folder.
    pub async fn set_folder_option(
        &self,
        folder_id: &str,
        option: FolderOption,
        value: &str,
    ) -> Result<()> {
        self.folders()
            .set_folder_option(folder_id, option, value)
            .await
    }

    /// Copy one or more contents into another folder.
    pub async fn copy_content(
        &self,
        content_ids: impl Into<ContentIds>,
        dest_folder_id: &str,
    ) -> Result<()> {
        self.contents()
            .copy_content(&content_ids.into(), dest_folder_id)
            .await
    }

    /// Delete one or more files or folders.
    pub async fn delete_content(&self, content_ids: impl Into<ContentIds>) -> Result<()> {
        self.contents().delete_content(&content_ids.into()).await
    }

    /// Get account details.
    pub async fn get_account_details(&self, all_details: bool) -> Result<Value> {
        self.account().get_account_details(all_details).await
    }
}

impl fmt::Debug for GofileClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GofileClient")
            .field("api_url", &self.api_url)
            .field("url_template", &self.url_template)
            .finish_non_exhaustive()
    }
}
