//! Upload registration and password-gated retrieval.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, error, info, warn};

use lockdrop_auth::credential::CredentialHasher;
use lockdrop_auth::secret::SecretGenerator;
use lockdrop_core::error::{AppError, ErrorKind};
use lockdrop_core::result::AppResult;
use lockdrop_core::traits::blob::BlobStore;
use lockdrop_core::types::LinkId;

use super::model::{RegisteredShare, RetrievedShare, ShareRecord, ShareStats};
use crate::filename::sanitize_filename;
use crate::registry::ShareRegistry;

/// Attempts at drawing an unused link identifier before giving up.
pub const MAX_LINK_ATTEMPTS: usize = 3;

/// Orchestrates secret generation, hashing, blob storage and the registry.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share metadata.
    registry: Arc<ShareRegistry>,
    /// Uploaded bytes, keyed by link.
    blobs: Arc<dyn BlobStore>,
    /// Link and password generator.
    secrets: Arc<SecretGenerator>,
    /// Password digests.
    hasher: Arc<CredentialHasher>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        registry: Arc<ShareRegistry>,
        blobs: Arc<dyn BlobStore>,
        secrets: Arc<SecretGenerator>,
        hasher: Arc<CredentialHasher>,
    ) -> Self {
        Self {
            registry,
            blobs,
            secrets,
            hasher,
        }
    }

    /// The registry backing this service.
    pub fn registry(&self) -> &Arc<ShareRegistry> {
        &self.registry
    }

    /// Registers an upload and returns its link and one-time-visible password.
    ///
    /// Either the blob and the record both exist afterwards, or neither does.
    pub async fn register_upload(
        &self,
        raw_filename: &str,
        data: Bytes,
    ) -> AppResult<RegisteredShare> {
        if raw_filename.trim().is_empty() {
            return Err(AppError::validation("No file selected"));
        }
        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        let original_name = sanitize_filename(raw_filename)?;

        let link_id = self.reserve_link(|| self.secrets.generate_link_id())?;
        // Releases the slot on every exit, including the future being dropped.
        let reservation = Reservation::new(&self.registry, link_id.clone());

        let password = self.secrets.generate_password();
        let plaintext = password.clone();
        let digest = self.run_hasher(move |h| h.hash_new(&plaintext)).await?;

        let size_bytes = match self.blobs.save(&link_id, data).await {
            Ok(n) => n,
            Err(e) => {
                warn!(link_id = %link_id, error = %e, "Blob write failed, releasing link");
                return Err(e);
            }
        };

        let record = ShareRecord::new(link_id.clone(), original_name, digest, size_bytes);
        let created_at = record.created_at;
        if let Err(e) = self.registry.commit(record) {
            error!(link_id = %link_id, error = %e, "Registry commit failed, removing blob");
            if let Err(del) = self.blobs.delete(&link_id).await {
                error!(link_id = %link_id, error = %del, "Failed to remove orphaned blob");
            }
            return Err(e);
        }
        reservation.disarm();

        info!(
            link_id = %link_id,
            size_bytes,
            created_at = %created_at.to_rfc3339(),
            "Share registered"
        );

        Ok(RegisteredShare { link_id, password })
    }

    /// Releases a share's blob if `attempt` matches its password.
    ///
    /// Unknown and malformed links cost the same Argon2 work as a wrong
    /// password before reporting `NotFound`. Retrieval never consumes the
    /// share.
    pub async fn retrieve(&self, link: &str, attempt: &str) -> AppResult<RetrievedShare> {
        let attempt = attempt.to_owned();

        let record = LinkId::parse(link)
            .ok()
            .and_then(|id| self.registry.get(&id));

        let Some(record) = record else {
            self.run_hasher(move |h| h.burn(&attempt)).await?;
            debug!("Retrieve for unknown link");
            return Err(AppError::not_found("Share not found"));
        };

        let digest = record.password_digest.clone();
        let valid = self
            .run_hasher(move |h| h.verify(&attempt, &digest))
            .await?;
        if !valid {
            warn!(link_id = %record.link_id, "Incorrect share password");
            return Err(AppError::authentication("Incorrect password"));
        }

        let stream = self.blobs.open(&record.link_id).await.map_err(|e| {
            if e.is(ErrorKind::NotFound) {
                error!(link_id = %record.link_id, "Registered share has no blob");
                AppError::storage(format!("Blob missing for share {}", record.link_id))
            } else {
                e
            }
        })?;

        info!(link_id = %record.link_id, "Share retrieved");

        Ok(RetrievedShare {
            original_name: record.original_name,
            size_bytes: record.size_bytes,
            stream,
        })
    }

    /// Registry and storage snapshot.
    pub async fn stats(&self) -> ShareStats {
        ShareStats {
            shares: self.registry.len(),
            storage_provider: self.blobs.provider_type().to_string(),
            storage_healthy: self.blobs.health_check().await.unwrap_or(false),
        }
    }

    fn reserve_link(&self, mut next: impl FnMut() -> LinkId) -> AppResult<LinkId> {
        for attempt in 1..=MAX_LINK_ATTEMPTS {
            let link_id = next();
            match self.registry.reserve(&link_id) {
                Ok(()) => return Ok(link_id),
                Err(e) if e.is(ErrorKind::Conflict) => {
                    warn!(attempt, "Generated link collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = MAX_LINK_ATTEMPTS,
            "Could not draw an unused link identifier"
        );
        Err(AppError::internal("Link identifier space exhausted"))
    }

    async fn run_hasher<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&CredentialHasher) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || f(&hasher))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }
}

/// Releases a link reservation when dropped unless disarmed.
struct Reservation<'a> {
    registry: &'a ShareRegistry,
    link_id: Option<LinkId>,
}

impl<'a> Reservation<'a> {
    fn new(registry: &'a ShareRegistry, link_id: LinkId) -> Self {
        Self {
            registry,
            link_id: Some(link_id),
        }
    }

    /// Keeps the slot; called once the record is committed.
    fn disarm(mut self) {
        self.link_id = None;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if let Some(link_id) = self.link_id.take() {
            debug!(link_id = %link_id, "Releasing unfinished reservation");
            self.registry.release(&link_id);
        }
    }
}
