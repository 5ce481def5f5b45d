//! Share metadata and service results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use lockdrop_auth::credential::PasswordDigest;
use lockdrop_core::traits::blob::ByteStream;
use lockdrop_core::types::LinkId;

/// Metadata binding one upload to its link and password digest.
#[derive(Debug, Clone)]
pub struct ShareRecord {
    /// Registry key and blob store key.
    pub link_id: LinkId,
    /// Sanitized upload filename, used only as the download name.
    pub original_name: String,
    /// Digest of the share password.
    pub password_digest: PasswordDigest,
    /// Size of the stored blob.
    pub size_bytes: u64,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl ShareRecord {
    /// Builds a record stamped with the current time.
    pub fn new(
        link_id: LinkId,
        original_name: String,
        password_digest: PasswordDigest,
        size_bytes: u64,
    ) -> Self {
        Self {
            link_id,
            original_name,
            password_digest,
            size_bytes,
            created_at: Utc::now(),
        }
    }
}

/// Result of a successful upload. The only place the plaintext password exists.
pub struct RegisteredShare {
    /// Link identifier of the new share.
    pub link_id: LinkId,
    /// Generated password, shown to the uploader once.
    pub password: String,
}

impl fmt::Debug for RegisteredShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredShare")
            .field("link_id", &self.link_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authorized download.
pub struct RetrievedShare {
    /// Name to offer the downloader.
    pub original_name: String,
    /// Blob size in bytes.
    pub size_bytes: u64,
    /// Blob contents.
    pub stream: ByteStream,
}

impl fmt::Debug for RetrievedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrievedShare")
            .field("original_name", &self.original_name)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

/// Snapshot for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ShareStats {
    /// Registered share count.
    pub shares: usize,
    /// Blob store provider name.
    pub storage_provider: String,
    /// Whether the blob store reported healthy.
    pub storage_healthy: bool,
}
