//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::DownloadForm;
pub use response::{ApiResponse, HealthResponse, UploadResponse};
