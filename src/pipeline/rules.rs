use super::checks::{
    check_author_red_flags, check_date_range, check_nhanes_citation, check_nhanes_date_range,
    check_survey_design_acknowledgment, check_title_template, check_weighting_methodology,
};
use super::types::CheckDefinition;

/// Step whose failure halts the run at its boundary.
pub const METHODOLOGY_STEP: u32 = 2;

/// The default rule table, in execution order.
///
/// Only the step-2 methodology group is critical; the placeholders stay in it
/// so reinstating their logic needs no orchestration change.
pub const DEFAULT_CHECKS: &[CheckDefinition] = &[
    CheckDefinition {
        name: "NHANES Citation",
        rule: check_nhanes_citation,
        step: 2,
        critical: true,
    },
    CheckDefinition {
        name: "Survey Design Acknowledgment",
        rule: check_survey_design_acknowledgment,
        step: 2,
        critical: true,
    },
    CheckDefinition {
        name: "Weighting Methodology",
        rule: check_weighting_methodology,
        step: 2,
        critical: true,
    },
    CheckDefinition {
        name: "Date Range Validation",
        rule: check_date_range,
        step: 3,
        critical: false,
    },
    CheckDefinition {
        name: "NHANES Date Range Validation",
        rule: check_nhanes_date_range,
        step: 4,
        critical: false,
    },
    CheckDefinition {
        name: "Title Template Detection",
        rule: check_title_template,
        step: 5,
        critical: false,
    },
    CheckDefinition {
        name: "Author Affiliation Red Flags",
        rule: check_author_red_flags,
        step: 6,
        critical: false,
    },
];
