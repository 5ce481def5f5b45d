//! Share registration and retrieval.

pub mod model;
pub mod service;

pub use model::{RegisteredShare, RetrievedShare, ShareRecord, ShareStats};
pub use service::{MAX_LINK_ATTEMPTS, ShareService};
