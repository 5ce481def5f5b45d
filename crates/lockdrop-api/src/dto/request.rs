//! Request DTOs.

use serde::{Deserialize, Serialize};

/// `POST /download/{link}` form body.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct DownloadForm {
    /// Password attempt; a missing field is treated as empty.
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for DownloadForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadForm")
            .field("password", &"<redacted>")
            .finish()
    }
}
