//! Link identifier and password generation from the OS entropy source.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rngs::OsRng};

use lockdrop_core::config::{MIN_LINK_BYTES, MIN_PASSWORD_BYTES, SecretsConfig};
use lockdrop_core::error::AppError;
use lockdrop_core::types::LinkId;

/// Generates unguessable share secrets.
///
/// Every token is drawn from [`OsRng`] and encoded as unpadded URL-safe
/// base64, so it can be placed in a path segment or typed into a form as-is.
#[derive(Debug, Clone)]
pub struct SecretGenerator {
    /// Random bytes per link identifier.
    link_bytes: usize,
    /// Random bytes per password.
    password_bytes: usize,
}

impl SecretGenerator {
    /// Creates a generator from the secrets configuration.
    ///
    /// Rejects sizes below [`MIN_LINK_BYTES`] / [`MIN_PASSWORD_BYTES`].
    pub fn new(config: &SecretsConfig) -> Result<Self, AppError> {
        if config.link_bytes < MIN_LINK_BYTES {
            return Err(AppError::configuration(format!(
                "Link identifiers need at least {MIN_LINK_BYTES} random bytes"
            )));
        }
        if config.password_bytes < MIN_PASSWORD_BYTES {
            return Err(AppError::configuration(format!(
                "Passwords need at least {MIN_PASSWORD_BYTES} random bytes"
            )));
        }
        Ok(Self {
            link_bytes: config.link_bytes,
            password_bytes: config.password_bytes,
        })
    }

    /// Checks that the OS entropy source can be read.
    ///
    /// Called once at startup; a failure here is fatal for the process.
    pub fn probe() -> Result<(), AppError> {
        let mut buf = [0u8; MIN_LINK_BYTES];
        OsRng.try_fill_bytes(&mut buf).map_err(|e| {
            AppError::configuration(format!("Secure random source unavailable: {e}"))
        })
    }

    /// Generates a fresh link identifier.
    pub fn generate_link_id(&self) -> LinkId {
        LinkId::from_token(token(self.link_bytes))
    }

    /// Generates a fresh share password.
    pub fn generate_password(&self) -> String {
        token(self.password_bytes)
    }

    /// Encoded length of a link identifier.
    pub fn link_len(&self) -> usize {
        encoded_len(self.link_bytes)
    }

    /// Encoded length of a password.
    pub fn password_len(&self) -> usize {
        encoded_len(self.password_bytes)
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self {
            link_bytes: MIN_LINK_BYTES,
            password_bytes: MIN_PASSWORD_BYTES,
        }
    }
}

fn token(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(&bytes)
}

fn encoded_len(bytes: usize) -> usize {
    (bytes * 4).div_ceil(3)
}
