use serde::{Deserialize, Serialize};

use super::verdict::CheckResult;

/// Overall verdict of one orchestration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalResult {
    #[serde(rename = "Not NHANES")]
    NotNhanes,
    Pass,
    Fail,
    Error,
}

impl FinalResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotNhanes => "Not NHANES",
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Error => "Error",
        }
    }
}

impl std::fmt::Display for FinalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully populated result of a manuscript screening run.
///
/// Built once by the orchestrator and handed to the caller; never mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Display title supplied by the caller. Not used by any check.
    pub title: String,
    #[serde(rename = "isNHANES")]
    pub is_nhanes: bool,
    pub final_result: FinalResult,
    pub details: Vec<String>,
    pub check_results: Vec<CheckResult>,
    #[serde(default)]
    pub fail_step: u32,
}

impl Report {
    /// Report for a manuscript that never mentions the survey.
    pub fn not_nhanes(title: &str) -> Self {
        Self {
            title: title.to_string(),
            is_nhanes: false,
            final_result: FinalResult::NotNhanes,
            details: vec!["✗ STEP 1: Manuscript does not mention NHANES. No checks were run.".into()],
            check_results: Vec::new(),
            fail_step: 0,
        }
    }

    /// Report substituted when a rule fails unexpectedly.
    pub fn errored(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            is_nhanes: true,
            final_result: FinalResult::Error,
            details: vec![format!("❌ Error: {message}")],
            check_results: Vec::new(),
            fail_step: 0,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.check_results
            .iter()
            .filter(|r| r.passed && !r.skipped)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.check_results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.check_results.iter().filter(|r| r.skipped).count()
    }
}
