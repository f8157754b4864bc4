//! Content lookup, copy and deletion for Gofile.

use crate::envelope;
use crate::error::Result;
use crate::password::Password;
use crate::types::ContentIds;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Content client for Gofile.
pub struct ContentClient<'a> {
    http: &'a Client,
    api_url: &'a str,
    token: &'a str,
    website_token: &'a str,
}

impl<'a> ContentClient<'a> {
    pub(crate) fn new(
        http: &'a Client,
        api_url: &'a str,
        token: &'a str,
        website_token: &'a str,
    ) -> Self {
        Self {
            http,
            api_url,
            token,
            website_token,
        }
    }

    /// Get the details of a file or folder.
    ///
    /// A password is sent as its SHA-256 digest, never in clear; an empty
    /// one is left out. A password that cannot be digested fails before any
    /// request is made.
    pub async fn get_content(&self, content_id: &str, password: Option<&Password>) -> Result<Value> {
        let mut params = vec![
            ("token", self.token.to_string()),
            ("contentId", content_id.to_string()),
            ("websiteToken", self.website_token.to_string()),
        ];
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            params.push(("password", password.digest()?));
        }

        let url = format!("{}/getContent", self.api_url);
        debug!(url = %url, content_id = %content_id, "Fetching content");

        let data = envelope::send(self.http.get(&url).query(&params), "getContent").await?;
        Ok(data.unwrap_or(Value::Null))
    }

    /// Copy one or more contents into another folder.
    pub async fn copy_content(&self, content_ids: &ContentIds, dest_folder_id: &str) -> Result<()> {
        let url = format!("{}/copyContent", self.api_url);
        debug!(url = %url, count = content_ids.len(), dest = %dest_folder_id, "Copying content");

        let contents_id = content_ids.joined();
        let request = self.http.put(&url).form(&[
            ("token", self.token),
            ("contentsId", contents_id.as_str()),
            ("folderIdDest", dest_folder_id),
        ]);

        envelope::send(request, "copyContent").await?;

        info!(count = content_ids.len(), dest = %dest_folder_id, "Content copied");
        Ok(())
    }

    /// Delete one or more files or folders.
    pub async fn delete_content(&self, content_ids: &ContentIds) -> Result<()> {
        let url = format!("{}/deleteContent", self.api_url);
        debug!(url = %url, count = content_ids.len(), "Deleting content");

        let contents_id = content_ids.joined();
        let request = self.http.delete(&url).form(&[
            ("token", self.token),
            ("contentsId", contents_id.as_str()),
        ]);

        envelope::send(request, "deleteContent").await?;

        info!(count = content_ids.len(), "Content deleted");
        Ok(())
    }
}
