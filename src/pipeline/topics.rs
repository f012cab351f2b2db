//! Topic extraction: scores title + abstract against a fixed taxonomy of
//! health domains by whole-word keyword frequency.

use std::sync::LazyLock;

use regex::Regex;

use super::sections::analysis_text;
use crate::config::{MAX_TOPICS, MIN_TOPIC_SCORE};

/// Label returned when no domain reaches the minimum score.
pub const GENERAL_MIXED: &str = "General Health/Mixed";

/// Label returned when there is no text to analyse at all.
pub const GENERAL_UNKNOWN: &str = "General Health/Unknown";

/// Health domains in declared order. Declared order breaks score ties.
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Cardiovascular Health",
        &["heart", "cardiovascular", "blood pressure", "hypertension", "cholesterol", "stroke", "coronary", "cardiac", "lipid"],
    ),
    (
        "Diabetes/Metabolic Health",
        &["diabetes", "diabetic", "glucose", "insulin", "hba1c", "glycemic", "prediabetes", "metabolic syndrome", "insulin resistance"],
    ),
    (
        "Obesity/Body Composition",
        &["obesity", "obese", "overweight", "bmi", "body mass index", "waist circumference", "adiposity", "body fat", "weight"],
    ),
    (
        "Nutrition/Diet",
        &["diet", "dietary", "nutrition", "nutrient", "intake", "food", "vitamin", "supplement", "beverage", "sodium"],
    ),
    (
        "Physical Activity",
        &["physical activity", "exercise", "sedentary", "fitness", "walking", "sitting", "accelerometer"],
    ),
    (
        "Mental Health",
        &["depression", "depressive", "anxiety", "mental health", "psychological", "phq-9", "suicidal", "psychiatric"],
    ),
    (
        "Respiratory Health",
        &["asthma", "copd", "lung", "respiratory", "spirometry", "wheezing", "pulmonary"],
    ),
    (
        "Kidney Health",
        &["kidney", "renal", "ckd", "egfr", "albuminuria", "creatinine", "nephropathy"],
    ),
    (
        "Environmental Exposures",
        &["lead", "mercury", "cadmium", "arsenic", "pesticide", "phthalate", "bisphenol", "pfas", "exposure", "environmental"],
    ),
    (
        "Oral Health",
        &["oral health", "dental", "periodontal", "periodontitis", "tooth", "teeth", "caries"],
    ),
    (
        "Infectious Disease",
        &["hepatitis", "hiv", "infection", "herpes", "hpv", "antibody", "seroprevalence", "vaccination"],
    ),
    (
        "Cancer",
        &["cancer", "tumor", "neoplasm", "carcinoma", "oncology", "malignancy"],
    ),
    (
        "Substance Use",
        &["smoking", "tobacco", "cigarette", "alcohol", "drinking", "cotinine", "cannabis", "marijuana", "substance use"],
    ),
    (
        "Sleep Health",
        &["sleep", "insomnia", "sleep duration", "sleep apnea", "snoring"],
    ),
    (
        "Reproductive/Maternal Health",
        &["pregnancy", "pregnant", "maternal", "menopause", "reproductive", "fertility", "infertility", "birth"],
    ),
];

struct HealthDomain {
    label: &'static str,
    keywords: Vec<Regex>,
}

static DOMAINS: LazyLock<Vec<HealthDomain>> = LazyLock::new(|| {
    DOMAIN_KEYWORDS
        .iter()
        .map(|&(label, keywords)| HealthDomain {
            label,
            keywords: keywords.iter().map(|k| keyword_regex(k)).collect(),
        })
        .collect()
});

/// Case-insensitive whole-word matcher; internal spaces match any whitespace run.
fn keyword_regex(keyword: &str) -> Regex {
    let body = keyword
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)\b{body}\b")).expect("Invalid topic keyword pattern")
}

/// Per-domain keyword score over `text`, in declared domain order.
pub fn score_domains(text: &str) -> Vec<(&'static str, usize)> {
    DOMAINS
        .iter()
        .map(|d| {
            let score: usize = d.keywords.iter().map(|re| re.find_iter(text).count()).sum();
            (d.label, score)
        })
        .collect()
}

/// Up to three domain labels for the manuscript, most relevant first.
pub fn extract_topics(text: &str) -> Vec<String> {
    let analysis = analysis_text(text);
    if analysis.is_empty() {
        return vec![GENERAL_UNKNOWN.to_string()];
    }

    let mut scored: Vec<(&str, usize)> = score_domains(&analysis)
        .into_iter()
        .filter(|&(_, score)| score >= MIN_TOPIC_SCORE)
        .collect();

    // Stable sort keeps declared order among equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    if scored.is_empty() {
        return vec![GENERAL_MIXED.to_string()];
    }

    tracing::debug!(
        analysis_chars = analysis.chars().count(),
        candidates = scored.len(),
        "Topic extraction scored domains"
    );

    scored
        .into_iter()
        .take(MAX_TOPICS)
        .map(|(label, _)| label.to_string())
        .collect()
}
