//! Share link identifier.
//!
//! A [`LinkId`] is an opaque token drawn from the secret generator. It is
//! both the registry key and the blob store key, so parsing one from
//! untrusted input only admits the URL-safe base64 alphabet. That keeps a
//! crafted link from ever addressing anything outside the blob namespace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest link identifier accepted from callers.
pub const MAX_LINK_ID_LEN: usize = 128;

/// Opaque identifier naming one share.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkId(String);

impl LinkId {
    /// Parse a link identifier, rejecting anything outside `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() || raw.len() > MAX_LINK_ID_LEN {
            return Err(AppError::validation("Malformed share link"));
        }
        if !raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(AppError::validation("Malformed share link"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wrap a token produced by the secret generator.
    ///
    /// The token must already be unpadded URL-safe base64.
    pub fn from_token(token: String) -> Self {
        debug_assert!(Self::parse(&token).is_ok(), "token outside link alphabet");
        Self(token)
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path component used by the HTTP surface for this share.
    pub fn download_path(&self) -> String {
        format!("/download/{}", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LinkId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LinkId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LinkId> for String {
    fn from(id: LinkId) -> String {
        id.0
    }
}

impl AsRef<str> for LinkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
