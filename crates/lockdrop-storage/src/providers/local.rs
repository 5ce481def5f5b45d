//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

use lockdrop_core::error::{AppError, ErrorKind};
use lockdrop_core::result::AppResult;
use lockdrop_core::traits::blob::{BlobStore, ByteStream};
use lockdrop_core::types::LinkId;

// Link identifiers never contain `.`, so this cannot collide with a blob.
const HEALTH_MARKER: &str = ".health";

/// Blob store keeping one flat file per share under a root directory.
///
/// Writes land in `<key>.part` first and are renamed into place once
/// flushed, so a reader never opens a half-written blob. Link identifiers
/// cannot contain `.`, which keeps the staging names out of the key space.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Directory holding all blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    fn resolve(&self, key: &LinkId) -> PathBuf {
        self.root.join(key.as_str())
    }

    fn staging(&self, key: &LinkId) -> PathBuf {
        self.root.join(format!("{key}.part"))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let marker = self.root.join(HEALTH_MARKER);
        let writable = async {
            fs::write(&marker, b"ok").await?;
            fs::remove_file(&marker).await
        }
        .await;

        if let Err(e) = writable {
            warn!(root = %self.root.display(), error = %e, "Blob root is not writable");
            return Ok(false);
        }
        Ok(true)
    }

    async fn save(&self, key: &LinkId, data: Bytes) -> AppResult<u64> {
        let staging = StagingFile::new(self.staging(key));
        let target = self.resolve(key);

        let mut file = fs::File::create(staging.path()).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob: {key}"),
                e,
            )
        })?;

        let written = async {
            file.write_all(&data).await?;
            file.flush().await?;
            file.sync_all().await
        }
        .await;
        drop(file);

        if let Err(e) = written {
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {key}"),
                e,
            ));
        }

        if let Err(e) = fs::rename(staging.path(), &target).await {
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to commit blob: {key}"),
                e,
            ));
        }
        staging.disarm();

        debug!(key = %key, bytes = data.len(), "Wrote blob");
        Ok(data.len() as u64)
    }

    async fn open(&self, key: &LinkId) -> AppResult<ByteStream> {
        let file = fs::File::open(self.resolve(key)).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {key}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open blob: {key}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(Bytes::from))))
    }

    async fn delete(&self, key: &LinkId) -> AppResult<()> {
        match fs::remove_file(self.resolve(key)).await {
            Ok(()) => {
                debug!(key = %key, "Deleted blob");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {key}"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &LinkId) -> AppResult<bool> {
        fs::try_exists(self.resolve(key)).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat blob: {key}"),
                e,
            )
        })
    }
}

/// Removes a staging file when dropped unless disarmed.
///
/// Covers both error returns and a `save` future that is dropped mid-write.
#[derive(Debug)]
struct StagingFile {
    path: Option<PathBuf>,
}

impl StagingFile {
    fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or(Path::new(""))
    }

    /// The file has been renamed into place; leave it alone.
    fn disarm(mut self) {
        self.path = None;
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Removed staging file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove staging file"),
            }
        }
    }
}
