//! Content passwords, sent to the API as a SHA-256 hex digest.

use crate::error::{GofileError, Result};
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fmt;

/// A content password.
///
/// Holds raw bytes so that passwords coming from the OS (arguments,
/// environment) can be accepted as-is; they must still be valid UTF-8
/// by the time a digest is computed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Vec<u8>);

impl Password {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// An empty password protects nothing and is not sent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex SHA-256 of the UTF-8 password text.
    pub fn digest(&self) -> Result<String> {
        let text = std::str::from_utf8(&self.0).map_err(|_| GofileError::PasswordDigest {
            input: String::from_utf8_lossy(&self.0).into_owned(),
        })?;

        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self::new(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self::new(password)
    }
}

impl From<Vec<u8>> for Password {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<OsString> for Password {
    fn from(password: OsString) -> Self {
        Self(password.into_encoded_bytes())
    }
}
