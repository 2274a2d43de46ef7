use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::errors::AppError;
use crate::extraction::UploadedDocument;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// Pulls the `resume` file out of a multipart form, ignoring other fields.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, "Malformed upload"))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, "Could not read uploaded file"))?;

        return Ok(UploadedDocument::new(file_name, content_type, bytes));
    }

    Err(AppError::Validation(format!(
        "No '{RESUME_FIELD}' file provided. Please upload a PDF resume to get started."
    )))
}

/// Body-limit overflows surface as 413; anything else is a bad request.
fn upload_error(err: MultipartError, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(
            "The uploaded file exceeds the maximum allowed size".to_string(),
        )
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}
