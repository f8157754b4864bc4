//! Account operations for Gofile.

use crate::envelope::{self, field};
use crate::error::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Account client for Gofile.
pub struct AccountClient<'a> {
    http: &'a Client,
    api_url: &'a str,
    token: &'a str,
}

impl<'a> AccountClient<'a> {
    pub(crate) fn new(http: &'a Client, api_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            api_url,
            token,
        }
    }

    /// Create a new guest account.
    ///
    /// Returns the token of the new account.
    pub async fn create_account(&self) -> Result<String> {
        let url = format!("{}/createAccount", self.api_url);
        debug!(url = %url, "Creating account");

        let data = envelope::send(self.http.get(&url), "createAccount").await?;
        let token: String = field(data, "token", "createAccount")?;

        info!("Account created");
        Ok(token)
    }

    /// Get account details.
    ///
    /// # Arguments
    /// * `all_details` - Ask the server for the verbose form
    pub async fn get_account_details(&self, all_details: bool) -> Result<Value> {
        let url = format!("{}/getAccountDetails", self.api_url);
        debug!(url = %url, all_details, "Fetching account details");

        let request = self.http.get(&url).query(&[
            ("token", self.token),
            ("allDetails", if all_details { "true" } else { "false" }),
        ]);

        let data = envelope::send(request, "getAccountDetails").await?;
        Ok(data.unwrap_or(Value::Null))
    }

    /// Look up the ID of the account's root folder.
    pub async fn root_folder(&self) -> Result<String> {
        let details = self.get_account_details(true).await?;
        let root: String = field(Some(details), "rootFolder", "getAccountDetails")?;

        debug!(root_folder = %root, "Resolved root folder");
        Ok(root)
    }
}
