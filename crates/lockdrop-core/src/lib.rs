//! # lockdrop-core
//!
//! Core crate for Lockdrop. Contains the blob store trait, configuration
//! schemas, the share identifier type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Lockdrop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
