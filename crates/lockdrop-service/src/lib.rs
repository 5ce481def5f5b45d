//! # lockdrop-service
//!
//! Business logic for Lockdrop. [`ShareService`] registers uploads and
//! gates retrieval on the share password; [`ShareRegistry`] holds the
//! share metadata for the life of the process.
//!
//! Services follow constructor injection: the registry, blob store, secret
//! generator and hasher are all handed in as `Arc`s at construction time.

pub mod filename;
pub mod registry;
pub mod share;

pub use filename::sanitize_filename;
pub use registry::ShareRegistry;
pub use share::{
    MAX_LINK_ATTEMPTS, RegisteredShare, RetrievedShare, ShareRecord, ShareService, ShareStats,
};
