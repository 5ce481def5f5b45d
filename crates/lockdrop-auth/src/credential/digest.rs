//! Stored password digest.

use std::fmt;

use subtle::ConstantTimeEq;

/// Per-record salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Argon2id output length in bytes.
pub const DIGEST_LEN: usize = 32;

/// One-way digest of a share password together with its salt.
///
/// There is no `PartialEq`; compare with [`PasswordDigest::ct_eq`], whose
/// running time does not depend on where two digests first differ.
#[derive(Clone)]
pub struct PasswordDigest {
    salt: [u8; SALT_LEN],
    hash: [u8; DIGEST_LEN],
}

impl PasswordDigest {
    /// Assemble a digest from its parts.
    pub fn from_parts(salt: [u8; SALT_LEN], hash: [u8; DIGEST_LEN]) -> Self {
        Self { salt, hash }
    }

    /// The salt this digest was computed with.
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// The raw Argon2id output.
    pub fn hash(&self) -> &[u8; DIGEST_LEN] {
        &self.hash
    }

    /// Constant-time comparison of salt and hash.
    pub fn ct_eq(&self, other: &Self) -> bool {
        let salt_eq = self.salt[..].ct_eq(&other.salt[..]);
        let hash_eq = self.hash[..].ct_eq(&other.hash[..]);
        (salt_eq & hash_eq).into()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("salt", &"<redacted>")
            .field("hash", &"<redacted>")
            .finish()
    }
}
