//! Application wiring: builds the share service stack from configuration.

use std::sync::Arc;

use tracing::info;

use lockdrop_auth::{CredentialHasher, SecretGenerator};
use lockdrop_core::config::AppConfig;
use lockdrop_core::result::AppResult;
use lockdrop_service::{ShareRegistry, ShareService};

use crate::state::AppState;

/// Constructs the blob store, registry, secret generator, hasher and
/// share service described by `config`.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    config.validate()?;

    let blobs = lockdrop_storage::build_blob_store(&config.storage).await?;
    let registry = Arc::new(ShareRegistry::new());
    let secrets = Arc::new(SecretGenerator::new(&config.secrets)?);
    let hasher = Arc::new(CredentialHasher::new(&config.hashing)?);

    info!(
        link_len = secrets.link_len(),
        password_len = secrets.password_len(),
        memory_kib = config.hashing.memory_kib,
        iterations = config.hashing.iterations,
        "Share credentials configured"
    );

    let share_service = Arc::new(ShareService::new(registry, blobs, secrets, hasher));

    Ok(AppState {
        config: Arc::new(config),
        share_service,
    })
}
