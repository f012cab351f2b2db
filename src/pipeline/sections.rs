//! Heuristic locators for the structural parts of a manuscript.
//!
//! Manuscripts arrive as flat text, so every locator works on line structure:
//! the title is the first non-empty line, sections start at a heading line and
//! run until the next heading or a blank-line run.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{leading_chars, AUTHOR_SECTION_CHARS, LEADING_WINDOW_CHARS};

static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^title\s*:\s*").unwrap());

static ABSTRACT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*abstract\b[ \t]*[:.]?").unwrap());

static AUTHOR_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*(?:authors?|affiliations?)[ \t]*(?::|$)").unwrap());

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:\d+\.?[ \t]*)?(?:introduction|background|methods?|methodology|materials|results|discussion|conclusions?|key[ \t]*words?|references|acknowledge?ments?|authors?|affiliations?)\b",
    )
    .unwrap()
});

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// Email address; capture group 1 is the domain.
pub(crate) static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@([A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,})\b").unwrap()
});

static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:department|dept\.|university|hospital|institute|college|school\s+of|faculty|laboratory|center|centre|clinic)\b",
    )
    .unwrap()
});

/// Where the author block was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorBlockSource {
    /// Section under an "Authors"/"Affiliations" heading after the abstract.
    Heading,
    /// Leading window of the manuscript, which looked like it held author info.
    LeadingWindow,
}

/// Working section for the author/affiliation checks.
#[derive(Debug, Clone)]
pub struct AuthorBlock<'a> {
    pub section: &'a str,
    pub source: AuthorBlockSource,
}

/// First non-empty line, with an optional "Title:" prefix removed.
pub fn extract_title(text: &str) -> &str {
    let Some(line) = text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return "";
    };
    match TITLE_PREFIX.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}

/// Text between an "Abstract" heading and the next heading or blank-line run.
pub fn extract_abstract(text: &str) -> &str {
    let Some(heading) = ABSTRACT_HEADING.find(text) else {
        return "";
    };
    section_body(&text[heading.end()..])
}

/// Title plus abstract, or the leading window when both are empty.
pub fn analysis_text(text: &str) -> String {
    let title = extract_title(text);
    let abstract_text = extract_abstract(text);

    if title.is_empty() && abstract_text.is_empty() {
        return leading_chars(text, LEADING_WINDOW_CHARS).trim().to_string();
    }
    format!("{title}\n{abstract_text}").trim().to_string()
}

/// Locate the author/affiliation working section, if the manuscript has one.
pub fn locate_author_block(text: &str) -> Option<AuthorBlock<'_>> {
    let search_from = ABSTRACT_HEADING.find(text).map_or(0, |m| m.end());
    let tail = &text[search_from..];

    if let Some(heading) = AUTHOR_HEADING.find(tail) {
        let section = section_body(&tail[heading.end()..]);
        if !section.is_empty() {
            return Some(AuthorBlock {
                section,
                source: AuthorBlockSource::Heading,
            });
        }
    }

    let leading = leading_chars(text, LEADING_WINDOW_CHARS);
    if EMAIL.is_match(leading) || INSTITUTION.is_match(leading) {
        return Some(AuthorBlock {
            section: leading_chars(text, AUTHOR_SECTION_CHARS),
            source: AuthorBlockSource::LeadingWindow,
        });
    }

    None
}

/// Body of a section whose heading ends at the start of `rest`.
///
/// A heading at the very start of the body is part of it (structured abstracts
/// open with "Background:"), so only later headings terminate the section.
fn section_body(rest: &str) -> &str {
    let rest = rest.trim_start();
    let blank = BLANK_RUN.find(rest).map(|m| m.start());
    let heading = SECTION_HEADING
        .find_iter(rest)
        .map(|m| m.start())
        .find(|&start| start > 0);

    let end = match (blank, heading) {
        (Some(b), Some(h)) => b.min(h),
        (Some(b), None) => b,
        (None, Some(h)) => h,
        (None, None) => rest.len(),
    };
    rest[..end].trim()
}
