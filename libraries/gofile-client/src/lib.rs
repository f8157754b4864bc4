//! Gofile Client
//!
//! HTTP client library for the gofile.io file hosting API.
//!
//! # Features
//!
//! - **Accounts**: Create guest accounts, fetch account details
//! - **Upload**: Upload files to the best available storage server
//! - **Content**: Look up, copy and delete files and folders
//! - **Folders**: Create folders and change their options
//!
//! Every response is a `{status, data}` envelope; anything but `"ok"` is
//! returned as [`GofileError::Remote`].
//!
//! # Example
//!
//! ```ignore
//! use gofile_client::{ClientConfig, GofileClient, Password};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GofileClient::new(ClientConfig::with_token("my-token")).await?;
//!
//!     client.create_folder("backups", None).await?;
//!
//!     let details = client
//!         .get_content("a1b2c3", Some(&Password::from("secret")))
//!         .await?;
//!     println!("{:#}", details);
//!
//!     Ok(())
//! }
//! ```

mod account;
mod client;
mod content;
mod envelope;
mod error;
mod folder;
mod password;
mod types;
mod upload;

pub use client::GofileClient;
pub use error::{ErrorKind, GofileError, Result};
pub use password::Password;
pub use types::{
    ClientConfig, ContentIds, FolderOption, UploadOptions, DEFAULT_API_SERVER,
    DEFAULT_URL_TEMPLATE, DEFAULT_WEBSITE_TOKEN,
};

// Re-export sub-clients for direct use if needed
pub use account::AccountClient;
pub use content::ContentClient;
pub use folder::FolderClient;
pub use upload::UploadClient;
