//! Argon2id password hashing and verification for share passwords.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::{RngCore, rngs::OsRng};

use lockdrop_core::config::HashingConfig;
use lockdrop_core::error::AppError;

use super::digest::{DIGEST_LEN, PasswordDigest, SALT_LEN};

// Fixed salt for decoy hashing on unknown links; never stored in a record.
const DECOY_SALT: [u8; SALT_LEN] = [0x5a; SALT_LEN];

/// Hashes share passwords with Argon2id and a per-record salt.
///
/// Hashing is deterministic for a given `(plaintext, salt)` pair, which is
/// what verification relies on.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Creates a hasher from the configured Argon2 cost parameters.
    pub fn new(config: &HashingConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            Some(DIGEST_LEN),
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes `plaintext` with an explicit salt.
    pub fn hash(&self, plaintext: &str, salt: [u8; SALT_LEN]) -> Result<PasswordDigest, AppError> {
        let mut out = [0u8; DIGEST_LEN];
        self.argon2()
            .hash_password_into(plaintext.as_bytes(), &salt, &mut out)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(PasswordDigest::from_parts(salt, out))
    }

    /// Hashes `plaintext` with a freshly drawn random salt.
    pub fn hash_new(&self, plaintext: &str) -> Result<PasswordDigest, AppError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        self.hash(plaintext, salt)
    }

    /// Verifies a password attempt against a stored digest.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify(&self, attempt: &str, digest: &PasswordDigest) -> Result<bool, AppError> {
        let candidate = self.hash(attempt, *digest.salt())?;
        Ok(candidate.ct_eq(digest))
    }

    /// Spends the same work as [`verify`](Self::verify) without a stored digest.
    ///
    /// Used on unknown links so their response time matches a wrong password.
    pub fn burn(&self, attempt: &str) -> Result<(), AppError> {
        self.hash(attempt, DECOY_SALT).map(|_| ())
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}
