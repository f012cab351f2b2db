use std::io::Read;
use std::path::Path;

use super::ExtractionError;

const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024; // 100MB

/// Manuscript container formats we can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "plain_text",
        }
    }
}

/// Detect file format from magic bytes, not the extension.
/// Anything that is neither PDF nor zip is treated as text.
pub fn detect_format(path: &Path) -> Result<DocumentFormat, ExtractionError> {
    let file_size = std::fs::metadata(path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(ExtractionError::UnsupportedFormat(format!(
            "file is {file_size} bytes, limit is {MAX_FILE_SIZE}"
        )));
    }

    let mut file = std::fs::File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;

    let format = match &header[..bytes_read] {
        // %PDF
        [0x25, 0x50, 0x44, 0x46, ..] => DocumentFormat::Pdf,
        // PK\x03\x04 (zip local file header)
        [0x50, 0x4B, 0x03, 0x04, ..] => DocumentFormat::Docx,
        _ => DocumentFormat::PlainText,
    };

    tracing::debug!(
        format = format.as_str(),
        file_size_bytes = file_size,
        "Detected manuscript format"
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_with(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn pdf_magic_detected() {
        let file = temp_with(b"%PDF-1.7\n...");
        assert_eq!(detect_format(file.path()).unwrap(), DocumentFormat::Pdf);
    }

    #[test]
    fn zip_magic_detected_as_docx() {
        let file = temp_with(b"PK\x03\x04rest");
        assert_eq!(detect_format(file.path()).unwrap(), DocumentFormat::Docx);
    }

    #[test]
    fn extension_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, "Just text").unwrap();
        assert_eq!(detect_format(&path).unwrap(), DocumentFormat::PlainText);
    }

    #[test]
    fn empty_file_is_text() {
        let file = temp_with(b"");
        assert_eq!(detect_format(file.path()).unwrap(), DocumentFormat::PlainText);
    }

    #[test]
    fn missing_file_errors() {
        assert!(matches!(
            detect_format(Path::new("/no/such/file")),
            Err(ExtractionError::Io(_))
        ));
    }
}
