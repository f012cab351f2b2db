//! PDF text-layer extraction via Google PDFium.
//!
//! Reads each page's embedded text in order. No rendering and no OCR, so a
//! scanned manuscript yields little or no text and will simply fail the
//! presence gate downstream.

use std::path::Path;

use pdfium_render::prelude::*;
use tracing::debug;

use super::{ExtractionError, TextSource};

/// Digital PDFs. Stateless; PDFium is bound per call because `Pdfium` is `!Send`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfSource;

impl TextSource for PdfSource {
    fn extract_text(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        let pdfium = load_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(&bytes, None)
            .map_err(map_load_error)?;

        let total = document.pages().len() as usize;
        if total == 0 {
            return Err(ExtractionError::EmptyDocument);
        }

        let mut pages = Vec::with_capacity(total);
        for (idx, page) in document.pages().iter().enumerate() {
            let text = page.text().map(|t| t.all()).unwrap_or_default();
            pages.push(text);
            progress(idx + 1, total);
        }

        debug!(pages = total, "PDF text layer extracted");
        Ok(pages.join("\n\n"))
    }
}

/// Load the PDFium dynamic library.
///
/// Discovery order:
/// 1. `PDFIUM_DYNAMIC_LIB_PATH` env var (explicit path to library file)
/// 2. Alongside the running executable
/// 3. System library search paths
fn load_pdfium() -> Result<Pdfium, ExtractionError> {
    if let Ok(path) = std::env::var("PDFIUM_DYNAMIC_LIB_PATH") {
        debug!(path = %path, "Loading PDFium from env var");
        let bindings = Pdfium::bind_to_library(&path).map_err(|e| {
            ExtractionError::PdfiumUnavailable(format!("Failed to load PDFium from {path}: {e}"))
        })?;
        return Ok(Pdfium::new(bindings));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let lib_path =
                Pdfium::pdfium_platform_library_name_at_path(exe_dir.to_string_lossy().as_ref());
            if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
                debug!(dir = %exe_dir.display(), "Loaded PDFium next to executable");
                return Ok(Pdfium::new(bindings));
            }
        }
    }

    let bindings = Pdfium::bind_to_system_library().map_err(|e| {
        ExtractionError::PdfiumUnavailable(format!(
            "PDFium library not found. Set PDFIUM_DYNAMIC_LIB_PATH or install PDFium: {e}"
        ))
    })?;
    Ok(Pdfium::new(bindings))
}

/// Encrypted PDFs get a message the user can act on.
fn map_load_error(e: PdfiumError) -> ExtractionError {
    let msg = e.to_string();
    let lower = msg.to_lowercase();
    let protected = matches!(
        e,
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError)
    );
    if protected || lower.contains("password") || lower.contains("encrypt") {
        ExtractionError::PdfParsing("PDF is password-protected".to_string())
    } else {
        ExtractionError::PdfParsing(format!("Failed to load PDF: {msg}"))
    }
}
