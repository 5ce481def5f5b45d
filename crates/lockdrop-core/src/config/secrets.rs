//! Share secret and password digest configuration.

use serde::{Deserialize, Serialize};

/// Smallest accepted link identifier entropy, in random bytes.
pub const MIN_LINK_BYTES: usize = 16;

/// Smallest accepted password entropy, in random bytes.
pub const MIN_PASSWORD_BYTES: usize = 8;

/// Random token sizes for generated share secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Random bytes per link identifier (encoded as unpadded URL-safe base64).
    #[serde(default = "default_link_bytes")]
    pub link_bytes: usize,
    /// Random bytes per generated password.
    #[serde(default = "default_password_bytes")]
    pub password_bytes: usize,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            link_bytes: default_link_bytes(),
            password_bytes: default_password_bytes(),
        }
    }
}

/// Argon2id cost parameters for password digests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_link_bytes() -> usize {
    MIN_LINK_BYTES
}

fn default_password_bytes() -> usize {
    MIN_PASSWORD_BYTES
}

// Argon2 crate defaults (19 MiB, t=2, p=1).
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
