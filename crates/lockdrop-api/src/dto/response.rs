//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Upload result: where to fetch the file and the password to do it with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Download path, `/download/{link}`.
    pub link: String,
    /// Plaintext password; never returned again.
    pub password: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Registered share count.
    pub shares: usize,
    /// Blob store provider.
    pub storage: String,
}
