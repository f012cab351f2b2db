use std::sync::LazyLock;

use regex::Regex;

/// Survey full name or acronym, without anchors or flags.
pub(crate) const SURVEY_NAME: &str =
    r"(?:NHANES|National\s+Health\s+and\s+Nutrition\s+Examination\s+Survey)";

static SURVEY_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b{SURVEY_NAME}\b")).unwrap());

/// Step 1 gate: does the manuscript name the survey as a whole word, in any case?
pub fn mentions_nhanes(text: &str) -> bool {
    SURVEY_MENTION.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_any_case() {
        for text in ["Data from NHANES.", "data from nhanes", "NhAnEs cycles"] {
            assert!(mentions_nhanes(text), "should match: {text}");
        }
    }

    #[test]
    fn full_name_matches() {
        assert!(mentions_nhanes(
            "We used the National Health and Nutrition\nExamination Survey."
        ));
    }

    #[test]
    fn acronym_inside_word_does_not_match() {
        assert!(!mentions_nhanes("The NHANESIII-like design"));
        assert!(!mentions_nhanes("preNHANES pilot"));
    }

    #[test]
    fn unrelated_survey_does_not_match() {
        assert!(!mentions_nhanes("Data from the Behavioral Risk Factor Surveillance System."));
        assert!(!mentions_nhanes(""));
    }
}
