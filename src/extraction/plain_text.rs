use std::path::Path;

use super::{ExtractionError, TextSource};

/// UTF-8 text files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_text(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        let text =
            String::from_utf8(bytes).map_err(|e| ExtractionError::EncodingError(e.to_string()))?;
        progress(1, 1);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        std::fs::write(&path, "Données NHANES").unwrap();
        let text = PlainTextSource.extract_text(&path, &mut |_, _| {}).unwrap();
        assert_eq!(text, "Données NHANES");
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        std::fs::write(&path, [0x4E, 0xFF, 0xFE, 0x41]).unwrap();
        let err = PlainTextSource.extract_text(&path, &mut |_, _| {}).unwrap_err();
        assert!(matches!(err, ExtractionError::EncodingError(_)));
    }
}
