//! Core type definitions used across the Lockdrop workspace.

pub mod id;

pub use id::{LinkId, MAX_LINK_ID_LEN};
