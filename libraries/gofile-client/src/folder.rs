//! Folder operations for Gofile.

use crate::envelope;
use crate::error::Result;
use crate::types::FolderOption;
use reqwest::Client;
use tracing::{debug, info};

/// Folder client for Gofile.
pub struct FolderClient<'a> {
    http: &'a Client,
    api_url: &'a str,
    token: &'a str,
}

impl<'a> FolderClient<'a> {
    pub(crate) fn new(http: &'a Client, api_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            api_url,
            token,
        }
    }

    /// Create a folder under an explicit parent.
    pub async fn create_folder(&self, folder_name: &str, parent_folder_id: &str) -> Result<()> {
        let url = format!("{}/createFolder", self.api_url);
        debug!(url = %url, name = %folder_name, parent = %parent_folder_id, "Creating folder");

        let request = self.http.put(&url).form(&[
            ("token", self.token),
            ("parentFolderId", parent_folder_id),
            ("folderName", folder_name),
        ]);

        envelope::send(request, "createFolder").await?;

        info!(name = %folder_name, parent = %parent_folder_id, "Folder created");
        Ok(())
    }

    /// Set an option on a folder.
    pub async fn set_folder_option(
        &self,
        folder_id: &str,
        option: FolderOption,
        value: &str,
    ) -> Result<()> {
        let url = format!("{}/setFolderOption", self.api_url);
        debug!(url = %url, folder_id = %folder_id, option = %option, "Setting folder option");

        let request = self.http.put(&url).form(&[
            ("token", self.token),
            ("folderId", folder_id),
            ("option", option.as_str()),
            ("value", value),
        ]);

        envelope::send(request, "setFolderOption").await?;
        Ok(())
    }
}
