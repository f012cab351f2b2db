//! Detects formulaic "Association between X and Y among Z: NHANES" titles.

use std::sync::LazyLock;

use regex::Regex;

use super::presence::SURVEY_NAME;
use crate::config::KEYWORD_STUFFING_THRESHOLD;
use crate::models::CheckVerdict;
use crate::pipeline::sections::extract_title;
use crate::pipeline::types::CheckError;

static ASSOCIATION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:associations?|associated|relationships?|relations?|correlations?|effects?|impacts?|influences?|links?)\s+(?:between|of|with|on|among|to)\b",
    )
    .unwrap()
});

static POPULATION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:among|in)\s+(?:the\s+)?(?:(?:u\.?s\.?|american|united\s+states|nationally|representative|general|older|young|middle-aged|non-hispanic|hispanic|black|white|mexican)\s+)*(?:adults?|children|adolescents|youths?|women|men|population|individuals|participants|elderly|people|persons|americans|seniors)\b",
    )
    .unwrap()
});

static STUDY_DESIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:cross[- ]sectional|cohort|longitudinal|population[- ]based|nationally\s+representative|retrospective|prospective|case[- ]control|secondary\s+analysis|{SURVEY_NAME})\b"
    ))
    .unwrap()
});

static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:using\s+data\s+from|data\s+from\s+the|evidence\s+from|findings\s+from|results\s+from|insights\s+from|an?\s+analysis\s+of)\b",
    )
    .unwrap()
});

/// What the title analysis found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleAnalysis {
    pub association: bool,
    pub population: bool,
    pub design: bool,
    pub boilerplate: Option<String>,
    pub long_tokens: usize,
}

impl TitleAnalysis {
    /// Template score: one point per element present, 0-3.
    pub fn score(&self) -> u8 {
        u8::from(self.association) + u8::from(self.population) + u8::from(self.design)
    }

    pub fn keyword_stuffed(&self) -> bool {
        self.long_tokens > KEYWORD_STUFFING_THRESHOLD
    }
}

pub fn analyze_title(title: &str) -> TitleAnalysis {
    TitleAnalysis {
        association: ASSOCIATION_PHRASE.is_match(title),
        population: POPULATION_PHRASE.is_match(title),
        design: STUDY_DESIGN.is_match(title),
        boilerplate: BOILERPLATE.find(title).map(|m| m.as_str().to_lowercase()),
        long_tokens: title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() > 2)
            .count(),
    }
}

pub fn check_title_template(text: &str) -> Result<CheckVerdict, CheckError> {
    let title = extract_title(text);
    if title.is_empty() {
        return Ok(CheckVerdict::pass("No title found; nothing to evaluate."));
    }

    let analysis = analyze_title(title);
    let score = analysis.score();

    if score >= 2 {
        if let Some(phrase) = &analysis.boilerplate {
            return Ok(CheckVerdict::fail(format!(
                "Title follows a common template (score {score}/3) and uses boilerplate phrasing (\"{phrase}\")."
            )));
        }
    }

    if score >= 3 {
        return Ok(CheckVerdict::fail(
            "Title matches every template element (association phrase, population descriptor, study design or survey name).",
        ));
    }

    if analysis.keyword_stuffed() {
        return Ok(CheckVerdict::fail(format!(
            "Title appears keyword-stuffed ({} long tokens, limit {KEYWORD_STUFFING_THRESHOLD}).",
            analysis.long_tokens
        )));
    }

    Ok(CheckVerdict::pass(format!(
        "Title does not follow a common template (score {score}/3)."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_template_fails_without_boilerplate() {
        let v = check_title_template(
            "Association of sleep duration with depression among US adults: a cross-sectional study\nBody",
        )
        .unwrap();
        assert!(!v.passed);
        assert!(v.details.contains("every template element"));
    }

    #[test]
    fn template_with_boilerplate_fails() {
        let v = check_title_template(
            "Association between diet and obesity among US adults using data from the NHANES 2017-2018\nBody",
        )
        .unwrap();
        assert!(!v.passed);
        assert!(v.details.contains("score 3/3"));
        assert!(v.details.contains("using data from"));
    }

    #[test]
    fn score_two_with_boilerplate_fails() {
        let analysis = analyze_title("Effects of lead among children: evidence from a national survey");
        assert_eq!(analysis.score(), 2);
        let v = check_title_template("Effects of lead among children: evidence from a national survey").unwrap();
        assert!(!v.passed);
        assert!(v.details.contains("boilerplate"));
    }

    #[test]
    fn score_two_without_boilerplate_passes() {
        let v = check_title_template("Effects of lead among children in rural counties").unwrap();
        assert!(v.passed, "{}", v.details);
        assert!(v.details.contains("score 2/3"));
    }

    #[test]
    fn plain_descriptive_title_passes() {
        let v = check_title_template("Trends in sodium intake\nAbstract\n...").unwrap();
        assert!(v.passed);
        assert!(v.details.contains("score 0/3"));
    }

    #[test]
    fn keyword_stuffing_alone_fails() {
        let title = "Obesity diabetes hypertension cholesterol kidney asthma depression anxiety \
                     sleep smoking alcohol cancer dental hepatitis lead mercury";
        let v = check_title_template(title).unwrap();
        assert!(!v.passed);
        assert!(v.details.contains("keyword-stuffed (16 long tokens"));
    }

    #[test]
    fn short_tokens_do_not_count_toward_stuffing() {
        let analysis = analyze_title("A to Z of BP in US: an ok way");
        assert_eq!(analysis.long_tokens, 1);
    }

    #[test]
    fn title_prefix_is_ignored() {
        let v = check_title_template("Title: Trends in sodium intake").unwrap();
        assert!(v.passed);
    }

    #[test]
    fn empty_manuscript_passes() {
        let v = check_title_template("").unwrap();
        assert!(v.passed);
        assert!(v.details.contains("No title"));
    }
}
