use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextExtractionError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Unreadable source {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The single I/O-bound boundary of the pipeline: OCR/PDF text extraction
/// lives behind this trait (allows mocking). The pipeline absorbs any failure
/// here as empty text rather than propagating it.
pub trait TextSource {
    fn extract(&self, path: &Path, media_type: &str) -> Result<String, TextExtractionError>;
}

/// Reads plain-text files directly. Useful for tests and pre-extracted input;
/// production deployments plug in an OCR-backed implementation.
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract(&self, path: &Path, media_type: &str) -> Result<String, TextExtractionError> {
        if media_type != "text/plain" {
            return Err(TextExtractionError::UnsupportedMediaType(
                media_type.to_string(),
            ));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_text_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Patient: John Doe").unwrap();

        let text = PlainTextSource
            .extract(file.path(), "text/plain")
            .unwrap();
        assert_eq!(text, "Patient: John Doe");
    }

    #[test]
    fn plain_text_source_rejects_images() {
        let err = PlainTextSource
            .extract(Path::new("/tmp/scan.jpg"), "image/jpeg")
            .unwrap_err();
        assert!(matches!(err, TextExtractionError::UnsupportedMediaType(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PlainTextSource
            .extract(Path::new("/nonexistent/page.txt"), "text/plain")
            .unwrap_err();
        assert!(matches!(err, TextExtractionError::Io(_)));
    }
}
