//! Blob store trait for pluggable upload storage backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;
use crate::types::LinkId;

/// A byte stream type used for reading blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Byte storage addressed by share link identifier.
///
/// The trait is defined here in `lockdrop-core` and implemented in
/// `lockdrop-storage` (local filesystem and in-memory).
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Check whether the backend is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Persist `data` under `key`, returning the number of bytes written.
    async fn save(&self, key: &LinkId, data: Bytes) -> AppResult<u64>;

    /// Open the blob stored under `key` as a byte stream.
    ///
    /// Returns a `NotFound` error when nothing is stored under `key`.
    async fn open(&self, key: &LinkId) -> AppResult<ByteStream>;

    /// Remove the blob stored under `key`. Removing a missing blob succeeds.
    async fn delete(&self, key: &LinkId) -> AppResult<()>;

    /// Check whether a blob is stored under `key`.
    async fn exists(&self, key: &LinkId) -> AppResult<bool>;
}
