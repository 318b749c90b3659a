//! Design upload route handler.
//!
//! Accepts a multipart `file` field, stores it under the user's design
//! prefix, and returns the public URL. When the object store write fails,
//! the design is returned inline as a base64 data URL instead of an error,
//! so the customer's editing session survives a storage outage.

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::services::storage::{DesignStorage, StorageError};
use crate::state::AppState;

/// Upload response: a public URL, or an inline data URL fallback.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Upload a design image.
///
/// `POST /api/uploads/design` (multipart, `file` field)
///
/// # Errors
///
/// 400 when the field is missing, the content type is not PNG/JPEG/WebP, or
/// the file exceeds the size cap. Storage failures are not errors; they
/// degrade to the data-URL fallback.
#[instrument(skip(state, auth, multipart))]
pub async fn design(
    State(state): State<AppState>,
    auth: RequireAuth,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .ok_or_else(|| AppError::BadRequest("File content type is required".to_owned()))?
                .to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;
            upload = Some((content_type, bytes.to_vec()));
            break;
        }
    }

    let Some((content_type, bytes)) = upload else {
        return Err(AppError::BadRequest("No file provided".to_owned()));
    };

    let extension = match DesignStorage::validate(&content_type, bytes.len()) {
        Ok(extension) => extension,
        Err(StorageError::UnsupportedType(_)) => {
            return Err(AppError::BadRequest(
                "Invalid file type. Please upload PNG, JPG, or WebP".to_owned(),
            ));
        }
        Err(StorageError::TooLarge { .. }) => {
            return Err(AppError::BadRequest(
                "File size must be less than 10MB".to_owned(),
            ));
        }
        Err(StorageError::Io(e)) => {
            return Err(AppError::Internal(e.to_string()));
        }
    };

    match state.storage().store(user.id, extension, &bytes).await {
        Ok(stored) => Ok(Json(UploadResponse {
            url: stored.url,
            path: Some(stored.key),
            message: None,
        })),
        Err(e) => {
            // Accepted degradation: hand the design back inline so the
            // editor keeps working without the object store.
            tracing::error!("Design upload failed, falling back to data URL: {e}");
            let data_url = format!("data:{content_type};base64,{}", BASE64.encode(&bytes));
            Ok(Json(UploadResponse {
                url: data_url,
                path: None,
                message: Some("Design stored temporarily".to_owned()),
            }))
        }
    }
}
