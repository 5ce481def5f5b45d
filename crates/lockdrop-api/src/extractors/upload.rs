//! Typed multipart upload extractor.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use bytes::Bytes;

use lockdrop_core::error::AppError;

use crate::error::ApiError;

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// A validated upload: the `file` part's client filename and bytes.
///
/// Other multipart fields are ignored. Handlers never see the raw
/// multipart stream.
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// Client-supplied filename, unsanitized.
    pub filename: String,
    /// File contents.
    pub data: Bytes,
}

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(multipart_error)?;
            return Ok(Self { filename, data });
        }

        Err(AppError::validation("No file part in request").into())
    }
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("Upload exceeds the maximum allowed size").into()
    } else {
        AppError::validation(format!("Multipart error: {}", err.body_text())).into()
    }
}
