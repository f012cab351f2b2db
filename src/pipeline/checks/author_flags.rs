//! Author/affiliation red flags: consumer webmail, affiliations unrelated to
//! the manuscript topic, and first-person claims of having collected the data.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::CheckVerdict;
use crate::pipeline::sections::{locate_author_block, EMAIL};
use crate::pipeline::topics::{extract_topics, GENERAL_MIXED};
use crate::pipeline::types::CheckError;

/// Consumer webmail domains. Compared against the lowercased email domain.
const WEBMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "msn.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "mail.com",
    "gmx.com",
    "protonmail.com",
    "proton.me",
    "yandex.com",
    "zoho.com",
    "qq.com",
    "163.com",
    "126.com",
];

/// Affiliation terms considered relevant per topic label.
const TOPIC_RELEVANCE: &[(&str, &[&str])] = &[
    ("Cardiovascular Health", &["cardio", "heart", "vascular", "internal medicine", "medicine"]),
    ("Diabetes/Metabolic Health", &["endocrin", "diabet", "metabol", "internal medicine", "medicine"]),
    ("Obesity/Body Composition", &["obesity", "nutrition", "endocrin", "metabol", "kinesiology", "medicine"]),
    ("Nutrition/Diet", &["nutrition", "dietetic", "food", "diet"]),
    ("Physical Activity", &["kinesiology", "exercise", "sport", "physical", "movement"]),
    ("Mental Health", &["psychiatr", "psycholog", "behavioral", "mental", "neuroscience"]),
    ("Respiratory Health", &["pulmon", "respiratory", "thoracic", "lung", "medicine"]),
    ("Kidney Health", &["nephrology", "renal", "kidney", "urology", "medicine"]),
    ("Environmental Exposures", &["environment", "toxicology", "occupational", "exposure"]),
    ("Oral Health", &["dental", "dentistry", "oral", "periodont"]),
    ("Infectious Disease", &["infectious", "microbiology", "immunology", "virology", "medicine"]),
    ("Cancer", &["oncology", "cancer", "tumor"]),
    ("Substance Use", &["addiction", "substance", "tobacco", "alcohol", "psychiatr"]),
    ("Sleep Health", &["sleep", "neurology", "psychiatr", "pulmon"]),
    ("Reproductive/Maternal Health", &["obstetric", "gynecolog", "maternal", "reproductive", "pediatric"]),
    (
        GENERAL_MIXED,
        &["public health", "epidemiology", "biostatistic", "statistic", "population", "preventive", "community", "health", "medicine", "nutrition"],
    ),
];

static AFFILIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:department|dept\.?|division|school|institute|cent(?:er|re)|faculty|college|laboratory)[ \t]+(?:of|for)[ \t]+[A-Za-z][A-Za-z&' \t-]*",
    )
    .unwrap()
});

static DATA_COLLECTION_CLAIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:we|the\s+authors)\s+(?:personally\s+|directly\s+|ourselves\s+)?(?:collected|gathered|obtained|recruited|enrolled|surveyed|interviewed|measured)\s+(?:the\s+|all\s+|our\s+)?(?:[0-9,]+\s+)?(?:participants|subjects|data|respondents|patients|individuals)\b",
    )
    .unwrap()
});

/// Raw flag inputs, exposed for reporting and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFlags {
    pub email_total: usize,
    pub email_webmail: usize,
    pub affiliations: Vec<String>,
    pub relevant_affiliations: usize,
    pub data_collection_claim: bool,
}

impl AuthorFlags {
    pub fn non_institutional_email(&self) -> bool {
        self.email_total > 0 && self.email_webmail * 2 > self.email_total
    }

    pub fn affiliation_mismatch(&self) -> bool {
        !self.affiliations.is_empty() && self.relevant_affiliations * 2 < self.affiliations.len()
    }

    pub fn count(&self) -> usize {
        [
            self.non_institutional_email(),
            self.affiliation_mismatch(),
            self.data_collection_claim,
        ]
        .into_iter()
        .filter(|&f| f)
        .count()
    }
}

/// Email domains in `section`, lowercased.
pub fn email_domains(section: &str) -> Vec<String> {
    EMAIL
        .captures_iter(section)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

pub fn is_webmail(domain: &str) -> bool {
    WEBMAIL_DOMAINS.contains(&domain)
}

/// Department/institute phrases, de-duplicated case-insensitively, first spelling kept.
pub fn extract_affiliations(section: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    AFFILIATION
        .find_iter(section)
        .map(|m| m.as_str().trim().to_string())
        .filter(|a| seen.insert(a.to_lowercase()))
        .collect()
}

/// Relevance terms for the detected topics; generic terms when none map.
pub fn relevance_terms(topics: &[String]) -> Vec<&'static str> {
    let mut terms: Vec<&'static str> = TOPIC_RELEVANCE
        .iter()
        .filter(|(label, _)| topics.iter().any(|t| t == label))
        .flat_map(|(_, terms)| terms.iter().copied())
        .collect();

    if terms.is_empty() {
        terms = TOPIC_RELEVANCE
            .iter()
            .find(|(label, _)| *label == GENERAL_MIXED)
            .map(|(_, terms)| terms.to_vec())
            .unwrap_or_default();
    }
    terms
}

pub fn has_data_collection_claim(text: &str) -> bool {
    DATA_COLLECTION_CLAIM.is_match(text)
}

fn evaluate_flags(section: &str, full_text: &str, topics: &[String]) -> AuthorFlags {
    let domains = email_domains(section);
    let affiliations = extract_affiliations(section);
    let terms = relevance_terms(topics);
    let relevant_affiliations = affiliations
        .iter()
        .filter(|a| {
            let lower = a.to_lowercase();
            terms.iter().any(|t| lower.contains(t))
        })
        .count();

    AuthorFlags {
        email_total: domains.len(),
        email_webmail: domains.iter().filter(|d| is_webmail(d)).count(),
        affiliations,
        relevant_affiliations,
        data_collection_claim: has_data_collection_claim(full_text),
    }
}

pub fn check_author_red_flags(text: &str) -> Result<CheckVerdict, CheckError> {
    let topics = extract_topics(text);
    let Some(block) = locate_author_block(text) else {
        return Ok(CheckVerdict::pass(
            "No author or affiliation information found; nothing to evaluate.",
        ));
    };

    let flags = evaluate_flags(block.section, text, &topics);
    tracing::debug!(
        source = ?block.source,
        emails = flags.email_total,
        affiliations = flags.affiliations.len(),
        flag_count = flags.count(),
        "Author block evaluated"
    );

    let topic_list = topics.join(", ");
    if flags.count() == 0 {
        return Ok(CheckVerdict::pass(format!(
            "No author red flags detected (0 flags). Detected topics: {topic_list}."
        )));
    }

    let mut clauses = Vec::new();
    if flags.non_institutional_email() {
        clauses.push(format!(
            "most author emails use non-institutional domains ({} of {})",
            flags.email_webmail, flags.email_total
        ));
    }
    if flags.affiliation_mismatch() {
        clauses.push(format!(
            "affiliations appear unrelated to the manuscript topics ({} of {} relevant; topics: {topic_list})",
            flags.relevant_affiliations,
            flags.affiliations.len()
        ));
    }
    if flags.data_collection_claim {
        clauses.push(
            "the manuscript claims the authors collected the data or recruited participants themselves"
                .to_string(),
        );
    }

    Ok(CheckVerdict::fail(format!(
        "{} red flag(s) detected: {}.",
        flags.count(),
        clauses.join("; ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =================================================================
    // FLAG 1: NON-INSTITUTIONAL EMAIL
    // =================================================================

    #[test]
    fn three_of_four_webmail_flags() {
        let text = "Diet quality\nAuthors: a@gmail.com, b@yahoo.com, c@hotmail.com, d@jhu.edu\nBody text.";
        let v = check_author_red_flags(text).unwrap();
        assert!(!v.passed);
        assert!(v.details.contains("non-institutional domains (3 of 4)"));
    }

    #[test]
    fn half_webmail_does_not_flag() {
        let flags = AuthorFlags {
            email_total: 2,
            email_webmail: 1,
            ..Default::default()
        };
        assert!(!flags.non_institutional_email());
    }

    #[test]
    fn webmail_domain_is_case_insensitive() {
        assert_eq!(email_domains("X@GMAIL.COM"), vec!["gmail.com".to_string()]);
        assert!(is_webmail("gmail.com"));
        assert!(!is_webmail("cdc.gov"));
    }

    // =================================================================
    // FLAG 2: AFFILIATION / TOPIC MISMATCH
    // =================================================================

    #[test]
    fn affiliations_are_deduplicated_case_insensitively() {
        let section = "Department of Physics, MIT\nDEPARTMENT OF PHYSICS, MIT\nSchool of Public Health";
        let affs = extract_affiliations(section);
        assert_eq!(affs, vec!["Department of Physics".to_string(), "School of Public Health".to_string()]);
    }

    #[test]
    fn unrelated_affiliations_flag() {
        let text = "Kidney function and renal decline\nAbstract\nCreatinine and kidney markers.\n\nAuthors:\nDepartment of Physics, Institute of Mechanical Engineering\n\nIntroduction";
        let v = check_author_red_flags(text).unwrap();
        assert!(!v.passed);
        assert!(v.details.contains("0 of 2 relevant"));
        assert!(v.details.contains("Kidney Health"));
    }

    #[test]
    fn relevant_affiliation_passes() {
        let text = "Kidney function and renal decline\nAbstract\nCreatinine and kidney markers.\n\nAuthors:\nDivision of Nephrology, Department of Physics\n\nIntroduction";
        let v = check_author_red_flags(text).unwrap();
        assert!(v.passed, "{}", v.details);
        assert!(v.details.contains("0 flags"));
    }

    #[test]
    fn unmapped_topics_use_general_terms() {
        let terms = relevance_terms(&["General Health/Unknown".to_string()]);
        assert!(terms.contains(&"public health"));
        let terms = relevance_terms(&["Cancer".to_string()]);
        assert!(terms.contains(&"oncology"));
        assert!(!terms.contains(&"public health"));
    }

    // =================================================================
    // FLAG 3: DATA COLLECTION CLAIM
    // =================================================================

    #[test]
    fn first_person_collection_claim_detected() {
        assert!(has_data_collection_claim("We recruited 1,200 participants from clinics."));
        assert!(has_data_collection_claim("The authors collected the data in 2019."));
        assert!(!has_data_collection_claim("Data were collected by NCHS staff."));
    }

    #[test]
    fn claim_anywhere_in_text_flags() {
        let text = "Sodium trends\nSchool of Public Health, State University\n\nMethods\nWe collected data at two sites.";
        let v = check_author_red_flags(text).unwrap();
        assert!(!v.passed);
        assert!(v.details.starts_with("1 red flag(s) detected"));
        assert!(v.details.contains("collected the data"));
    }

    // =================================================================
    // VACUOUS PASS
    // =================================================================

    #[test]
    fn no_author_info_passes() {
        let v = check_author_red_flags("A plain title\nJust body text without names.").unwrap();
        assert!(v.passed);
        assert!(v.details.contains("No author or affiliation information"));
    }

    #[test]
    fn multiple_flags_are_all_reported() {
        let text = "Asthma and lung function in asthma\nAbstract\nLung asthma.\n\nAuthors:\njoe@gmail.com, Department of Music\n\nMethods\nWe enrolled participants.";
        let v = check_author_red_flags(text).unwrap();
        assert!(!v.passed);
        assert!(v.details.starts_with("3 red flag(s) detected"));
    }
}
