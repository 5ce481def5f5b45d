//! Shared application state handed to every handler.

use std::sync::Arc;

use lockdrop_core::config::AppConfig;
use lockdrop_service::ShareService;

/// State threaded through the router via `.with_state(state)`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Share registration and retrieval.
    pub share_service: Arc<ShareService>,
}
