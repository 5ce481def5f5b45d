//! Core traits defined in `lockdrop-core` and implemented by other crates.

pub mod blob;

pub use blob::{BlobStore, ByteStream};
