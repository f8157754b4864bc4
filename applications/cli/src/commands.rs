/// Subcommands and their dispatch onto the client
use anyhow::Result;
use clap::Subcommand;
use gofile_client::{FolderOption, GofileClient, Password, UploadOptions};
use serde_json::Value;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new guest account and print its token
    CreateAccount,
    /// Print the best server for uploads
    Server,
    /// Upload a file
    Upload {
        /// File to upload
        file: PathBuf,
        /// Add the file to this folder
        #[arg(long)]
        folder_id: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        password: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Expiry as a unix timestamp
        #[arg(long)]
        expire: Option<String>,
    },
    /// Show the details of a file or folder
    Content {
        content_id: String,
        #[arg(long)]
        password: Option<OsString>,
    },
    /// Create a folder (in the root folder unless --parent is given)
    CreateFolder {
        name: String,
        #[arg(long)]
        parent: Option<String>,
    },
    /// Set an option on a folder
    SetOption {
        folder_id: String,
        /// public, password, description, expire, tags or any other API option name
        option: FolderOption,
        value: String,
    },
    /// Copy contents into a folder
    Copy {
        dest_folder_id: String,
        #[arg(required = true)]
        content_ids: Vec<String>,
    },
    /// Delete files or folders
    Delete {
        #[arg(required = true)]
        content_ids: Vec<String>,
    },
    /// Show account details
    Account {
        /// Skip the verbose details
        #[arg(long)]
        brief: bool,
    },
}

impl Command {
    /// Whether the command needs a client with an existing token.
    pub fn needs_token(&self) -> bool {
        !matches!(self, Command::CreateAccount)
    }

    /// Run the command; returns the JSON to print, if any.
    pub async fn execute(self, client: &GofileClient) -> Result<Option<Value>> {
        let output = match self {
            Command::CreateAccount => Some(Value::String(client.token().to_string())),
            Command::Server => Some(Value::String(client.get_server().await?)),
            Command::Upload {
                file,
                folder_id,
                description,
                password,
                tags,
                expire,
            } => {
                let options = UploadOptions {
                    folder_id,
                    description,
                    password,
                    tags,
                    expire,
                };
                Some(client.upload_file(&file, &options).await?)
            }
            Command::Content {
                content_id,
                password,
            } => {
                let password = password.map(Password::from);
                Some(client.get_content(&content_id, password.as_ref()).await?)
            }
            Command::CreateFolder { name, parent } => {
                client.create_folder(&name, parent.as_deref()).await?;
                None
            }
            Command::SetOption {
                folder_id,
                option,
                value,
            } => {
                client.set_folder_option(&folder_id, option, &value).await?;
                None
            }
            Command::Copy {
                dest_folder_id,
                content_ids,
            } => {
                client.copy_content(content_ids, &dest_folder_id).await?;
                None
            }
            Command::Delete { content_ids } => {
                client.delete_content(content_ids).await?;
                None
            }
            Command::Account { brief } => Some(client.get_account_details(!brief).await?),
        };

        Ok(output)
    }
}
