//! Custom Axum extractors.

pub mod upload;

pub use upload::UploadForm;
