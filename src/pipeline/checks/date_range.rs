//! Year-range validation against the NHANES two-year release cycle
//! (odd start year, even end year, e.g. 2017-2018).

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::{Captures, Regex};

use super::presence::SURVEY_NAME;
use crate::config::MIN_PLAUSIBLE_YEAR;
use crate::models::CheckVerdict;
use crate::pipeline::types::CheckError;

static BARE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{4})\s*[-–—]\s*([0-9]{4})\b").unwrap());

/// Year pair directly after a survey mention ("NHANES 2017-2018", "NHANES (2015–2016)").
static ANCHORED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{SURVEY_NAME}[\s,:(]*([0-9]{{4}})\s*[-–—]\s*([0-9]{{4}})\b"
    ))
    .unwrap()
});

/// Which year pairs a validator considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateScope {
    /// Anchored pairs if any exist, otherwise every bare pair.
    General,
    /// Only pairs immediately preceded by a survey mention.
    SurveyAdjacent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeClass {
    Valid,
    Invalid,
    Implausible,
}

/// Classify a start/end pair against the plausibility window and cycle parity.
pub fn classify_range(start: i32, end: i32, current_year: i32) -> RangeClass {
    if start < MIN_PLAUSIBLE_YEAR || end > current_year || end < start {
        return RangeClass::Implausible;
    }
    if start % 2 == 1 && end % 2 == 0 {
        RangeClass::Valid
    } else {
        RangeClass::Invalid
    }
}

#[derive(Debug, Default)]
struct ClassifiedRanges {
    valid: Vec<String>,
    invalid: Vec<String>,
    implausible: Vec<String>,
}

impl ClassifiedRanges {
    /// Informational suffix; implausible ranges never decide the verdict.
    fn implausible_note(&self) -> String {
        if self.implausible.is_empty() {
            String::new()
        } else {
            format!(
                " Ignored implausible range(s): {}.",
                self.implausible.join(", ")
            )
        }
    }
}

pub fn check_date_range(text: &str) -> Result<CheckVerdict, CheckError> {
    validate_date_ranges(text, DateScope::General, current_year())
}

pub fn check_nhanes_date_range(text: &str) -> Result<CheckVerdict, CheckError> {
    validate_date_ranges(text, DateScope::SurveyAdjacent, current_year())
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Validate the year pairs in `text` for `scope`, with `current_year` as the
/// upper plausibility bound.
pub fn validate_date_ranges(
    text: &str,
    scope: DateScope,
    current_year: i32,
) -> Result<CheckVerdict, CheckError> {
    let ranges = classify_all(candidate_pairs(text, scope), current_year)?;
    let label = match scope {
        DateScope::General => "date ranges",
        DateScope::SurveyAdjacent => "NHANES-adjacent date ranges",
    };

    if !ranges.valid.is_empty() {
        let mut details = format!(
            "Valid NHANES cycle range(s): {}.",
            ranges.valid.join(", ")
        );
        if !ranges.invalid.is_empty() {
            details.push_str(&format!(
                " Also found range(s) not matching the cycle pattern: {}.",
                ranges.invalid.join(", ")
            ));
        }
        details.push_str(&ranges.implausible_note());
        return Ok(CheckVerdict::pass(details));
    }

    if !ranges.invalid.is_empty() {
        return Ok(CheckVerdict::fail(format!(
            "Invalid {label}: {}. NHANES cycles start in an odd year and end in an even year.{}",
            ranges.invalid.join(", "),
            ranges.implausible_note()
        )));
    }

    if !ranges.implausible.is_empty() {
        return Ok(CheckVerdict::pass(format!(
            "Only implausible year range(s) found ({}); excluded from validation.",
            ranges.implausible.join(", ")
        )));
    }

    Ok(CheckVerdict::pass(format!(
        "No {label} found; nothing to validate."
    )))
}

fn candidate_pairs(text: &str, scope: DateScope) -> Vec<Captures<'_>> {
    let anchored: Vec<Captures<'_>> = ANCHORED_PAIR.captures_iter(text).collect();
    match scope {
        DateScope::SurveyAdjacent => anchored,
        DateScope::General if !anchored.is_empty() => anchored,
        DateScope::General => BARE_PAIR.captures_iter(text).collect(),
    }
}

/// Classify pairs, de-duplicating on the normalised "YYYY-YYYY" form in
/// first-seen order.
fn classify_all(pairs: Vec<Captures<'_>>, current_year: i32) -> Result<ClassifiedRanges, CheckError> {
    let mut seen = HashSet::new();
    let mut ranges = ClassifiedRanges::default();

    for caps in pairs {
        let start = parse_year(&caps[1])?;
        let end = parse_year(&caps[2])?;
        let range = format!("{start}-{end}");
        if !seen.insert(range.clone()) {
            continue;
        }
        match classify_range(start, end, current_year) {
            RangeClass::Valid => ranges.valid.push(range),
            RangeClass::Invalid => ranges.invalid.push(range),
            RangeClass::Implausible => ranges.implausible.push(range),
        }
    }

    Ok(ranges)
}

fn parse_year(raw: &str) -> Result<i32, CheckError> {
    raw.parse::<i32>()
        .map_err(|_| CheckError::InvalidYear(raw.to_string()))
}
