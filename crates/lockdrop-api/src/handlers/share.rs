//! Upload and password-gated download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use lockdrop_core::error::AppError;
use lockdrop_storage::content_type_for;

use crate::dto::request::DownloadForm;
use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::extractors::UploadForm;
use crate::state::AppState;

/// POST /upload
///
/// Registers the file and returns the download path with its password. The
/// password is not recoverable after this response.
pub async fn upload(
    State(state): State<AppState>,
    form: UploadForm,
) -> Result<Json<UploadResponse>, ApiError> {
    let registered = state
        .share_service
        .register_upload(&form.filename, form.data)
        .await?;

    Ok(Json(UploadResponse {
        link: registered.link_id.download_path(),
        password: registered.password,
    }))
}

/// POST /download/{link}
///
/// A body that is not a urlencoded form counts as an empty password.
pub async fn download(
    State(state): State<AppState>,
    Path(link): Path<String>,
    form: Result<Form<DownloadForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let share = state
        .share_service
        .retrieve(&link, &form.password)
        .await?;

    // Stored names are already restricted to [A-Za-z0-9._-].
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&share.original_name))
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", share.original_name),
        )
        .header(header::CONTENT_LENGTH, share.size_bytes)
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from_stream(share.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
