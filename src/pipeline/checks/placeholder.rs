//! Reserved step-2 rules. They sit in the critical group so real logic can be
//! dropped in later without touching the orchestration.

use crate::models::CheckVerdict;
use crate::pipeline::types::CheckError;

pub const SURVEY_DESIGN_SKIPPED: &str =
    "Survey design acknowledgment check is not yet implemented; skipped.";

pub const WEIGHTING_SKIPPED: &str =
    "Weighting methodology check is not yet implemented; skipped.";

pub fn check_survey_design_acknowledgment(_text: &str) -> Result<CheckVerdict, CheckError> {
    Ok(CheckVerdict::skipped(SURVEY_DESIGN_SKIPPED))
}

pub fn check_weighting_methodology(_text: &str) -> Result<CheckVerdict, CheckError> {
    Ok(CheckVerdict::skipped(WEIGHTING_SKIPPED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_always_skip() {
        for text in ["", "NHANES with complex sampling and MEC weights", "garbage"] {
            let design = check_survey_design_acknowledgment(text).unwrap();
            let weighting = check_weighting_methodology(text).unwrap();
            assert!(design.passed && design.skipped);
            assert!(weighting.passed && weighting.skipped);
            assert!(!design.is_failure());
            assert_eq!(weighting.details, WEIGHTING_SKIPPED);
        }
    }
}
