//! In-memory blob store.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use lockdrop_core::error::AppError;
use lockdrop_core::result::AppResult;
use lockdrop_core::traits::blob::{BlobStore, ByteStream};
use lockdrop_core::types::LinkId;

/// Blob store holding uploads in process memory.
///
/// Contents vanish with the process, which matches the lifetime of the
/// share registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<DashMap<LinkId, Bytes>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn save(&self, key: &LinkId, data: Bytes) -> AppResult<u64> {
        let len = data.len() as u64;
        self.blobs.insert(key.clone(), data);
        Ok(len)
    }

    async fn open(&self, key: &LinkId) -> AppResult<ByteStream> {
        let data = self
            .blobs
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Blob not found: {key}")))?;

        Ok(Box::pin(futures::stream::once(async move {
            Ok::<_, std::io::Error>(data)
        })))
    }

    async fn delete(&self, key: &LinkId) -> AppResult<()> {
        self.blobs.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &LinkId) -> AppResult<bool> {
        Ok(self.blobs.contains_key(key))
    }
}
