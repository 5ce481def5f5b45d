//! # lockdrop-storage
//!
//! Blob store implementations for Lockdrop. Uploaded bytes are stored under
//! their share link identifier, either on the local filesystem or in memory.

pub mod manager;
pub mod mime;
pub mod providers;

pub use manager::build_blob_store;
pub use mime::content_type_for;
#[cfg(feature = "local")]
pub use providers::LocalBlobStore;
#[cfg(feature = "memory")]
pub use providers::MemoryBlobStore;
