//! DOCX text extraction: reads `word/document.xml` out of the zip container
//! and flattens its runs into lines.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{ExtractionError, TextSource};

const DOCUMENT_PART: &str = "word/document.xml";

/// Word documents (Office Open XML).
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxSource;

impl TextSource for DocxSource {
    fn extract_text(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<String, ExtractionError> {
        let file = File::open(path)?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| ExtractionError::Docx(e.to_string()))?;
        let xml = read_entry(&mut archive, DOCUMENT_PART)?;
        let text = document_xml_to_text(&xml)?;
        progress(1, 1);
        Ok(text)
    }
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, ExtractionError> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| ExtractionError::Docx(format!("{name}: {e}")))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::EncodingError(format!("{name}: {e}")))?;
    Ok(xml)
}

/// Flatten WordprocessingML body text.
///
/// `<w:t>` content is kept, paragraph ends and `<w:br/>` become newlines,
/// `<w:tab/>` becomes a tab. Everything else is markup.
pub fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text = true;
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Docx(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    pub(crate) fn write_docx(path: &Path, document_xml: &str) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("[Content_Types].xml", FileOptions::default())
            .unwrap();
        zip.write_all(b"<Types/>").unwrap();
        zip.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:r><w:t>Sodium intake</w:t></w:r><w:r><w:t xml:space="preserve"> trends</w:t></w:r></w:p>
<w:p><w:r><w:t>Abstract</w:t></w:r></w:p>
<w:p><w:r><w:t>NHANES 2017&#8211;2018</w:t><w:tab/><w:t>CDC &amp; NCHS</w:t><w:br/><w:t>next</w:t></w:r></w:p>
</w:body>
</w:document>"#;

    #[test]
    fn flattens_runs_paragraphs_and_breaks() {
        let text = document_xml_to_text(BODY).unwrap();
        assert_eq!(
            text,
            "Sodium intake trends\nAbstract\nNHANES 2017–2018\tCDC & NCHS\nnext\n"
        );
    }

    #[test]
    fn markup_text_outside_runs_is_ignored() {
        let xml = r#"<w:document><w:body><w:p><w:pPr>style</w:pPr><w:r><w:t>kept</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(document_xml_to_text(xml).unwrap(), "kept\n");
    }

    #[test]
    fn reads_document_part_from_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.docx");
        write_docx(&path, BODY);

        let mut calls = 0;
        let text = DocxSource
            .extract_text(&path, &mut |_, _| calls += 1)
            .unwrap();
        assert!(text.starts_with("Sodium intake trends\n"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn missing_document_part_is_docx_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        let file = File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("other.xml", FileOptions::default()).unwrap();
        zip.write_all(b"<x/>").unwrap();
        zip.finish().unwrap();

        let err = DocxSource.extract_text(&path, &mut |_, _| {}).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(ref m) if m.contains(DOCUMENT_PART)));
    }

    #[test]
    fn non_zip_is_docx_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.docx");
        std::fs::write(&path, "not a zip").unwrap();
        let err = DocxSource.extract_text(&path, &mut |_, _| {}).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }
}
