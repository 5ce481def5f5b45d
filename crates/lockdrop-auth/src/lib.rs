//! # lockdrop-auth
//!
//! Credential primitives for Lockdrop shares.
//!
//! ## Modules
//!
//! - `secret`: OS-entropy link identifiers and share passwords
//! - `credential`: salted Argon2id password digests and constant-time verification

pub mod credential;
pub mod secret;

pub use credential::{CredentialHasher, PasswordDigest};
pub use secret::SecretGenerator;
