//! Blob store selection from configuration.

use std::sync::Arc;

use tracing::info;

use lockdrop_core::config::StorageConfig;
use lockdrop_core::error::AppError;
use lockdrop_core::result::AppResult;
use lockdrop_core::traits::blob::BlobStore;

/// Build the blob store named by `config.provider`.
pub async fn build_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    let store: Arc<dyn BlobStore> = match config.provider.as_str() {
        #[cfg(feature = "local")]
        "local" => Arc::new(crate::providers::LocalBlobStore::new(&config.root_path).await?),
        #[cfg(feature = "memory")]
        "memory" => Arc::new(crate::providers::MemoryBlobStore::new()),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown storage provider: {other}"
            )));
        }
    };

    info!(
        provider = store.provider_type(),
        root = %config.root_path,
        "Blob store initialized"
    );
    Ok(store)
}
