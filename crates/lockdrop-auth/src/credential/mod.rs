//! Password digests and verification.

pub mod digest;
pub mod hasher;

pub use digest::{DIGEST_LEN, PasswordDigest, SALT_LEN};
pub use hasher::CredentialHasher;
