//! Document text extraction for uploaded resumes. PDF via `pdf-extract`,
//! plain text via strict UTF-8 decode; everything else is rejected up
//! front. No structural parsing happens here — the CV beautifier applies
//! its own keyword heuristic on the returned text.

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Infers the document kind from the uploaded filename and declared
    /// MIME type. Unknown kinds fail here, before any bytes are touched.
    pub fn detect(filename: Option<&str>, content_type: Option<&str>) -> Result<Self, AppError> {
        if let Some(ct) = content_type {
            if ct.eq_ignore_ascii_case("application/pdf") {
                return Ok(DocumentKind::Pdf);
            }
            if ct.eq_ignore_ascii_case("text/plain") {
                return Ok(DocumentKind::Text);
            }
        }
        if let Some(name) = filename {
            let lower = name.to_ascii_lowercase();
            if lower.ends_with(".pdf") {
                return Ok(DocumentKind::Pdf);
            }
            if lower.ends_with(".txt") {
                return Ok(DocumentKind::Text);
            }
        }
        Err(AppError::UnsupportedFormat(
            "upload must be a PDF or plain text file".to_string(),
        ))
    }
}

/// Carried in `AppState` as `Arc<dyn DocumentExtractor>`; tests inject a
/// fake that returns fixed text.
pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], kind: DocumentKind) -> Result<String, AppError>;
}

pub struct PdfTextExtractor;

impl DocumentExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8], kind: DocumentKind) -> Result<String, AppError> {
        match kind {
            DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| AppError::Parse(format!("could not read PDF: {e}"))),
            DocumentKind::Text => String::from_utf8(bytes.to_vec())
                .map_err(|_| AppError::Parse("upload is not valid UTF-8 text".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect(None, Some("application/pdf")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(None, Some("text/plain")).unwrap(),
            DocumentKind::Text
        );
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            DocumentKind::detect(Some("resume.PDF"), None).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(Some("resume.txt"), None).unwrap(),
            DocumentKind::Text
        );
    }

    #[test]
    fn test_detect_rejects_unknown_kinds() {
        let result = DocumentKind::detect(Some("resume.docx"), Some("application/msword"));
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_plain_text_round_trips_verbatim() {
        let original = "Python Developer with 5 years experience\nand a second line";
        let extracted = PdfTextExtractor
            .extract(original.as_bytes(), DocumentKind::Text)
            .unwrap();
        assert_eq!(extracted, original);
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let result = PdfTextExtractor.extract(&[0xff, 0xfe, 0x00], DocumentKind::Text);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_corrupt_pdf_is_a_parse_error() {
        let result = PdfTextExtractor.extract(b"not a pdf at all", DocumentKind::Pdf);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
