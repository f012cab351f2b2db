/// Application-level constants
pub const APP_NAME: &str = "nhanes-check";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Earliest start year accepted as a plausible survey range.
pub const MIN_PLAUSIBLE_YEAR: i32 = 1950;

/// Leading window (in characters) used when no title/abstract is found, and
/// probed for author information when no "Authors"/"Affiliations" heading exists.
pub const LEADING_WINDOW_CHARS: usize = 3_000;

/// Working section size (in characters) for the author fallback.
pub const AUTHOR_SECTION_CHARS: usize = 1_000;

/// Domains scoring below this are discarded by the topic extractor.
pub const MIN_TOPIC_SCORE: usize = 2;

/// Maximum number of topic labels returned.
pub const MAX_TOPICS: usize = 3;

/// Titles with more long tokens than this are treated as keyword stuffed.
pub const KEYWORD_STUFFING_THRESHOLD: usize = 15;

/// Distinct citation indicators required by the citation check.
pub const MIN_CITATION_ELEMENTS: usize = 2;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "nhanes_check_lib=info,nhanes_check=info"
}

/// Filter used with `--verbose`.
pub fn verbose_log_filter() -> &'static str {
    "nhanes_check_lib=debug,nhanes_check=debug"
}

/// Return the first `max_chars` characters of `text` without splitting a code point.
pub fn leading_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_nhanes_check() {
        assert_eq!(APP_NAME, "nhanes-check");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn author_window_inside_leading_window() {
        assert!(AUTHOR_SECTION_CHARS <= LEADING_WINDOW_CHARS);
    }

    #[test]
    fn leading_chars_short_text_unchanged() {
        assert_eq!(leading_chars("abc", 10), "abc");
    }

    #[test]
    fn leading_chars_respects_char_boundaries() {
        let text = "ééééé";
        assert_eq!(leading_chars(text, 2), "éé");
    }

    #[test]
    fn log_filters_target_library() {
        assert!(default_log_filter().contains("nhanes_check_lib=info"));
        assert!(verbose_log_filter().contains("debug"));
    }
}
