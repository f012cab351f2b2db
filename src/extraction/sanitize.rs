/// Normalise extracted text before it reaches the checks.
///
/// Line structure must survive: the title and section locators are line based.
/// Only control characters other than newline and tab are dropped, and CRLF/CR
/// line endings become `\n`.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_bytes() {
        assert_eq!(sanitize_extracted_text("NHANES\x00 2017"), "NHANES 2017");
    }

    #[test]
    fn strips_control_characters_but_keeps_layout() {
        let raw = "Title\x01\x02\n\tAbstract\x1b\n\nMethods";
        assert_eq!(sanitize_extracted_text(raw), "Title\n\tAbstract\n\nMethods");
    }

    #[test]
    fn normalises_line_endings() {
        assert_eq!(sanitize_extracted_text("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn preserves_dashes_and_accents() {
        let raw = "NHANES 2015–2016 — Hernández et al.";
        assert_eq!(sanitize_extracted_text(raw), raw);
    }
}
