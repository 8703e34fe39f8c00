use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, upload::UploadResponseDto},
    server::{
        error::AppError,
        service::upload::{PendingUpload, UploadService},
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Upload car images.
///
/// Reads every part of a `multipart/form-data` body, keeping those whose content type
/// is `image/*`, then stores them concurrently. If any upload fails the request fails;
/// images already stored by then are not removed.
///
/// # Returns
/// - `200 OK` - Public URLs of the stored images, in part order
/// - `400 Bad Request` - Not a multipart body, or no image parts
/// - `413 Payload Too Large` - Body exceeds the configured upload limit
/// - `500 Internal Server Error` - Storage rejected an upload
#[utoipa::path(
    post,
    path = "/api/upload-multiple",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "One or more image parts"),
    responses(
        (status = 200, description = "Successfully uploaded images", body = UploadResponseDto),
        (status = 400, description = "No image files provided", body = ErrorDto),
        (status = 413, description = "Upload too large", body = ErrorDto),
        (status = 500, description = "Failed to upload files", body = ErrorDto)
    ),
)]
pub async fn upload_multiple(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let mut files = Vec::new();

    while let Some(mut field) = multipart.next_field().await? {
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !PendingUpload::is_image(&content_type) {
            tracing::debug!(
                "Skipping multipart part {:?} with content type {:?}",
                field.name(),
                content_type
            );
            continue;
        }

        let file_name = field
            .file_name()
            .or(field.name())
            .unwrap_or_default()
            .to_string();

        let mut buffer = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            buffer.extend_from_slice(&chunk);
        }

        files.push(PendingUpload {
            file_name,
            content_type,
            content: Bytes::from(buffer),
        });
    }

    let service = UploadService::new(state.storage.as_ref());
    let urls = service.upload_all(files).await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponseDto {
            success: true,
            urls,
        }),
    ))
}
