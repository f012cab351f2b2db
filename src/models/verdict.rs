use serde::{Deserialize, Serialize};

/// Outcome of a single rule check over the manuscript text.
///
/// A skipped verdict never counts as a failure, whatever `passed` says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVerdict {
    pub passed: bool,
    pub details: String,
    #[serde(default)]
    pub skipped: bool,
}

impl CheckVerdict {
    pub fn pass(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
            skipped: false,
        }
    }

    pub fn fail(details: impl Into<String>) -> Self {
        Self {
            passed: false,
            details: details.into(),
            skipped: false,
        }
    }

    /// Placeholder verdict: nominally passed, excluded from failure logic.
    pub fn skipped(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
            skipped: true,
        }
    }

    /// True when this verdict should be treated as a failure by the pipeline.
    pub fn is_failure(&self) -> bool {
        !self.skipped && !self.passed
    }
}

/// Report entry: a verdict tagged with the check that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub check_name: String,
    pub passed: bool,
    pub details: String,
    pub skipped: bool,
}

impl CheckResult {
    pub fn from_verdict(check_name: &str, verdict: CheckVerdict) -> Self {
        Self {
            check_name: check_name.to_string(),
            passed: verdict.passed,
            details: verdict.details,
            skipped: verdict.skipped,
        }
    }

    pub fn is_failure(&self) -> bool {
        !self.skipped && !self.passed
    }
}
