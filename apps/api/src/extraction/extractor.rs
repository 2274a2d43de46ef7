use async_trait::async_trait;
use thiserror::Error;

use crate::extraction::document::{DocumentKind, UploadedDocument};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("The uploaded file is empty")]
    EmptyUpload,

    #[error("Unsupported file '{0}': please upload a PDF or plain-text resume")]
    Unsupported(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Converts an uploaded document into plain text.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: &UploadedDocument) -> Result<String, ExtractionError>;
}

/// Reads PDFs with `pdf-extract` and passes plain text through.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, document: &UploadedDocument) -> Result<String, ExtractionError> {
        match document.kind()? {
            DocumentKind::PlainText => Ok(String::from_utf8_lossy(&document.bytes).into_owned()),
            DocumentKind::Pdf => {
                let bytes = document.bytes.clone();
                tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&bytes)
                        .map_err(|e| ExtractionError::Pdf(e.to_string()))
                })
                .await?
            }
        }
    }
}

/// Extracts resume text, treating an unreadable document as an empty resume.
///
/// Uploads that are empty or of an unsupported type are still errors; a PDF
/// that fails to parse scores 0.0 on every role instead.
pub async fn extract_resume_text(
    extractor: &dyn TextExtractor,
    document: &UploadedDocument,
) -> Result<String, ExtractionError> {
    match extractor.extract(document).await {
        Ok(text) => Ok(text),
        Err(err @ (ExtractionError::Pdf(_) | ExtractionError::Task(_))) => {
            tracing::warn!(
                file_name = document.file_name.as_deref().unwrap_or("<unnamed>"),
                "Resume text extraction failed, scoring as empty: {err}"
            );
            Ok(String::new())
        }
        Err(err) => Err(err),
    }
}
