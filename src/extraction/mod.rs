//! Manuscript text extraction.
//!
//! The check pipeline only ever sees a `&str`; everything that turns a file on
//! disk into that string lives here, behind the `TextSource` trait.

pub mod docx;
pub mod format;
pub mod pdf;
pub mod plain_text;
pub mod sanitize;

use std::path::Path;

use thiserror::Error;

pub use docx::DocxSource;
pub use format::{detect_format, DocumentFormat};
pub use pdf::PdfSource;
pub use plain_text::PlainTextSource;
pub use sanitize::sanitize_extracted_text;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format for extraction: {0}")]
    UnsupportedFormat(String),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("DOCX parsing failed: {0}")]
    Docx(String),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("PDFium library unavailable: {0}")]
    PdfiumUnavailable(String),

    #[error("Document contains no pages")]
    EmptyDocument,
}

/// Turns a manuscript file into plain text.
///
/// `progress(done, total)` is called as units of work (pages) complete.
pub trait TextSource {
    fn extract_text(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<String, ExtractionError>;
}

/// Picks a source by sniffing the file's magic bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoTextSource;

impl TextSource for AutoTextSource {
    fn extract_text(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<String, ExtractionError> {
        let format = detect_format(path)?;
        tracing::info!(format = format.as_str(), "Extracting manuscript text");

        let raw = match format {
            DocumentFormat::Pdf => PdfSource.extract_text(path, progress)?,
            DocumentFormat::Docx => DocxSource.extract_text(path, progress)?,
            DocumentFormat::PlainText => PlainTextSource.extract_text(path, progress)?,
        };

        let text = sanitize_extracted_text(&raw);
        tracing::info!(
            format = format.as_str(),
            text_length = text.len(),
            "Extraction complete"
        );
        Ok(text)
    }
}
