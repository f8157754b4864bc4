//! File upload operations for Gofile.

use crate::envelope::{self, field};
use crate::error::Result;
use crate::types::{host_url, UploadOptions};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Upload client for Gofile.
pub struct UploadClient<'a> {
    http: &'a Client,
    api_url: &'a str,
    url_template: &'a str,
    token: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(
        http: &'a Client,
        api_url: &'a str,
        url_template: &'a str,
        token: &'a str,
    ) -> Self {
        Self {
            http,
            api_url,
            url_template,
            token,
        }
    }

    /// Get the best server available to receive files.
    pub async fn get_server(&self) -> Result<String> {
        let url = format!("{}/getServer", self.api_url);
        debug!(url = %url, "Getting upload server");

        let data = envelope::send(self.http.get(&url), "getServer").await?;
        let server: String = field(data, "server", "getServer")?;

        debug!(server = %server, "Selected upload server");
        Ok(server)
    }

    /// Upload a single file.
    ///
    /// The file is read before any request is made. The upload then takes
    /// two requests: one to pick a server and one to send the file to it.
    ///
    /// # Returns
    /// The file metadata assigned by the server.
    pub async fn upload_file(&self, file_path: &Path, options: &UploadOptions) -> Result<Value> {
        let (file_part, file_name, file_size) = read_file_part(file_path).await?;

        let server = self.get_server().await?;
        let url = format!("{}/uploadFile", host_url(self.url_template, &server));
        debug!(url = %url, file = %file_path.display(), "Uploading file");

        let form = Form::new()
            .text("token", self.token.to_string())
            .part("file", file_part);
        let form = options.apply(form);

        let data = envelope::send(self.http.post(&url).multipart(form), "uploadFile").await?;

        info!(
            file = %file_name,
            size = file_size,
            server = %server,
            "File uploaded"
        );

        Ok(data.unwrap_or(Value::Null))
    }
}

/// Read a file into a multipart part. The handle is closed on return.
async fn read_file_part(file_path: &Path) -> Result<(Part, String, usize)> {
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    let contents = {
        let mut file = File::open(file_path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;
        contents
    };
    let file_size = contents.len();

    let mime = mime_guess::from_path(file_path).first_or_octet_stream();
    let part = Part::bytes(contents)
        .file_name(file_name.clone())
        .mime_str(mime.essence_str())?;

    Ok((part, file_name, file_size))
}
