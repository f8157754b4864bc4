//! Error types for the Gofile client.

use thiserror::Error;

/// Errors that can occur when talking to the Gofile API.
#[derive(Error, Debug)]
pub enum GofileError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body was not the expected envelope
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Envelope status was something other than "ok"
    #[error("status: {status}")]
    Remote { status: String },

    /// Password could not be digested
    #[error("failed to generate digest from password: {input}")]
    PasswordDigest { input: String },

    /// Local file could not be read for upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid host template or API server
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

/// Broad failure class of a [`GofileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network fault, HTTP failure status or malformed response
    Transport,
    /// The API answered but refused the call
    Remote,
    /// Bad input detected before anything was sent
    LocalPrecondition,
}

impl GofileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GofileError::Transport(_) | GofileError::HttpStatus { .. } | GofileError::Parse(_) => {
                ErrorKind::Transport
            }
            GofileError::Remote { .. } => ErrorKind::Remote,
            GofileError::PasswordDigest { .. } | GofileError::Io(_) | GofileError::InvalidUrl(_) => {
                ErrorKind::LocalPrecondition
            }
        }
    }
}

/// Result type for Gofile client operations.
pub type Result<T> = std::result::Result<T, GofileError>;
