use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cvparse_core::{LlmClient, LlmError};
use cvparse_ingest::IngestError;

use crate::models::ErrorJson;
use crate::state::AppState;
use crate::upload::{self, UploadedFile};

pub async fn upload_file(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match handle_upload(state, multipart).await {
        Ok(parsed) => Json(parsed).into_response(),
        Err(e) => e.into_response(),
    }
}

enum UploadError {
    BadRequest(String),
    Llm(LlmError),
    Internal(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Llm(e) => (
                StatusCode::BAD_GATEWAY,
                format!("language model request failed: {e}"),
            ),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        tracing::warn!(%status, %error, "upload failed");
        (status, Json(ErrorJson { error })).into_response()
    }
}

async fn handle_upload(
    state: Arc<AppState>,
    multipart: Multipart,
) -> Result<serde_json::Value, UploadError> {
    let file = upload::parse_multipart(multipart)
        .await
        .map_err(UploadError::BadRequest)?;

    tracing::info!(
        filename = %file.filename,
        bytes = file.data.len(),
        file_type = ?file.file_type,
        "received resume upload"
    );

    let resume_text = extract_blocking(file).await?;

    let client = LlmClient::new(state.llm_config.clone());
    client
        .parse_resume(&resume_text)
        .await
        .map_err(UploadError::Llm)
}

/// Write the upload to a temp file and extract its text off the async
/// runtime (MuPDF is blocking). The temp directory is removed when the
/// closure returns.
async fn extract_blocking(file: UploadedFile) -> Result<String, UploadError> {
    tokio::task::spawn_blocking(move || {
        let temp_dir = tempfile::tempdir()
            .map_err(|e| UploadError::Internal(format!("Failed to create temp directory: {e}")))?;

        let path = temp_dir
            .path()
            .join(format!("upload.{}", file.file_type.extension()));
        std::fs::write(&path, &file.data)
            .map_err(|e| UploadError::Internal(format!("Failed to write temp file: {e}")))?;

        cvparse_ingest::extract_text(&path).map_err(|e| match e {
            e @ IngestError::UnsupportedFormat(_) => UploadError::BadRequest(e.to_string()),
            other => UploadError::Internal(format!("{}: {}", file.filename, other)),
        })
    })
    .await
    .map_err(|e| UploadError::Internal(format!("Task join error: {e}")))?
}
