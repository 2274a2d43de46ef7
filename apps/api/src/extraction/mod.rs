// Text extraction: turns an uploaded resume into plain text.
// PDF parsing is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod document;
pub mod extractor;

pub use document::{DocumentKind, UploadedDocument};
pub use extractor::{extract_resume_text, DocumentTextExtractor, ExtractionError, TextExtractor};
