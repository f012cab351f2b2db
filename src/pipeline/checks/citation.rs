use std::sync::LazyLock;

use regex::Regex;

use crate::config::MIN_CITATION_ELEMENTS;
use crate::models::CheckVerdict;
use crate::pipeline::types::CheckError;

/// A citation indicator with the label reported in details.
struct CitationPattern {
    regex: Regex,
    element: &'static str,
    /// Agency names also occur inside URLs ("cdc.gov/nchs"); those must not count.
    outside_urls: bool,
}

/// The five fixed citation indicators. Each counts once, however often it matches.
static CITATION_PATTERNS: LazyLock<Vec<CitationPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)\bNational\s+Center\s+for\s+Health\s+Statistics\b|\bNCHS\b",
            "NCHS",
            true,
        ),
        pattern(
            r"(?i)\bCenters?\s+for\s+Disease\s+Control(?:\s+and\s+Prevention)?\b|\bCDC\b",
            "CDC",
            true,
        ),
        pattern(
            r"(?i)\b(?:https?://)?(?:www\.)?cdc\.gov/nchs/nhanes\b",
            "NHANES URL",
            false,
        ),
        pattern(
            r"(?i)\b(?:NCHS\s+)?(?:Research\s+)?Ethics\s+Review\s+Board\b|\bERB\s+protocol\b",
            "ethics approval",
            false,
        ),
        pattern(
            r"(?i)\bpublicly\s+(?:available|accessible)\b|\bpublic[\s-]+use\s+(?:data|files?)\b",
            "public availability",
            false,
        ),
    ]
});

/// A methods heading on its own line ("2. Methods", "Materials and Methods")
/// or an inline "Methods:" label.
static METHODS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:\d+(?:\.\d+)*\.?[ \t]*)?(?:materials[ \t]+and[ \t]+)?method(?:s|ology)\b|\bmethod(?:s|ology)[ \t]*:",
    )
    .unwrap()
});

/// Web addresses, with or without a scheme.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:https?://\S+|www\.\S+|[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:gov|org|com|edu|net)/\S*)",
    )
    .unwrap()
});

fn pattern(regex_str: &str, element: &'static str, outside_urls: bool) -> CitationPattern {
    CitationPattern {
        regex: Regex::new(regex_str).expect("Invalid citation regex pattern"),
        element,
        outside_urls,
    }
}

/// Labels of the citation indicators present in `text`, in table order.
pub fn citation_elements(text: &str) -> Vec<&'static str> {
    let without_urls = URL.replace_all(text, " ");
    CITATION_PATTERNS
        .iter()
        .filter(|p| {
            let haystack: &str = if p.outside_urls { &without_urls } else { text };
            p.regex.is_match(haystack)
        })
        .map(|p| p.element)
        .collect()
}

pub fn has_methods_section(text: &str) -> bool {
    METHODS_HEADING.is_match(text)
}

/// Passes with at least two citation indicators and a methods section.
pub fn check_nhanes_citation(text: &str) -> Result<CheckVerdict, CheckError> {
    let elements = citation_elements(text);
    let has_methods = has_methods_section(text);
    let found = elements.len();
    let listing = if elements.is_empty() {
        String::new()
    } else {
        format!(" ({})", elements.join(", "))
    };

    if found >= MIN_CITATION_ELEMENTS && has_methods {
        return Ok(CheckVerdict::pass(format!(
            "Found {found} citation element(s){listing} and a methods section."
        )));
    }

    let mut unmet = Vec::new();
    if found < MIN_CITATION_ELEMENTS {
        unmet.push(format!(
            "only {found} citation element(s) found{listing}, at least {MIN_CITATION_ELEMENTS} required"
        ));
    }
    if !has_methods {
        unmet.push("no methods or methodology section found".to_string());
    }

    Ok(CheckVerdict::fail(format!(
        "Citation requirements not met: {}. Citation elements found: {found}.",
        unmet.join("; ")
    )))
}
