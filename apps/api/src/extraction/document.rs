use bytes::Bytes;

use crate::extraction::extractor::ExtractionError;

const PDF_MAGIC: &[u8] = b"%PDF-";
const TEXT_EXTENSIONS: &[&str] = &[".txt", ".text", ".md"];

/// Formats the extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

/// A file received from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn new(file_name: Option<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Decides how to read the upload: PDF magic bytes first, then file name, then declared content type.
    pub fn kind(&self) -> Result<DocumentKind, ExtractionError> {
        if self.bytes.is_empty() {
            return Err(ExtractionError::EmptyUpload);
        }
        if self.bytes.starts_with(PDF_MAGIC) {
            return Ok(DocumentKind::Pdf);
        }

        let name = self.file_name.as_deref().unwrap_or_default().to_lowercase();
        let content_type = self.content_type.as_deref().unwrap_or_default().to_lowercase();

        if name.ends_with(".pdf") || content_type == "application/pdf" {
            Ok(DocumentKind::Pdf)
        } else if TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
            || content_type.starts_with("text/")
        {
            Ok(DocumentKind::PlainText)
        } else {
            Err(ExtractionError::Unsupported(self.describe()))
        }
    }

    fn describe(&self) -> String {
        match (&self.file_name, &self.content_type) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(content_type)) if !content_type.is_empty() => content_type.clone(),
            _ => "unnamed upload".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: Option<&str>, content_type: Option<&str>, bytes: &'static [u8]) -> UploadedDocument {
        UploadedDocument::new(
            name.map(String::from),
            content_type.map(String::from),
            Bytes::from_static(bytes),
        )
    }

    #[test]
    fn test_pdf_detected_by_magic_bytes() {
        let upload = doc(Some("resume.bin"), None, b"%PDF-1.7\n...");
        assert_eq!(upload.kind().unwrap(), DocumentKind::Pdf);
    }

    #[test]
    fn test_pdf_detected_by_name() {
        let upload = doc(Some("Resume.PDF"), None, b"garbage");
        assert_eq!(upload.kind().unwrap(), DocumentKind::Pdf);
    }

    #[test]
    fn test_text_detected_by_extension_or_content_type() {
        assert_eq!(
            doc(Some("cv.md"), None, b"# CV").kind().unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            doc(None, Some("text/plain; charset=utf-8"), b"SQL").kind().unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_image_is_unsupported() {
        let err = doc(Some("photo.png"), Some("image/png"), b"\x89PNG").kind().unwrap_err();
        assert!(matches!(err, ExtractionError::Unsupported(ref name) if name == "photo.png"));
    }

    #[test]
    fn test_empty_upload_rejected() {
        let err = doc(Some("resume.pdf"), None, b"").kind().unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyUpload));
    }
}
