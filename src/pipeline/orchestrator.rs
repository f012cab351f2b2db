//! Step-grouped check orchestration.
//!
//! Runs the presence gate, then the ordered rule table. Checks sharing a step
//! form a group; the step-2 methodology group is all-or-nothing at its
//! boundary, and a critical failure in any later step stops the run at once.

use crate::models::{CheckResult, FinalResult, Report};

use super::checks::mentions_nhanes;
use super::rules::{DEFAULT_CHECKS, METHODOLOGY_STEP};
use super::types::{CheckDefinition, CheckError};

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Untitled";

const CRITICAL_FAILURE_PREFIX: &str = "❌ Critical failure";

/// Where a run currently stands. Step bookkeeping lives on `PipelineRun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Failed,
}

/// Mutable bookkeeping for one run. Consumed into a `Report` by `finish`.
#[derive(Debug)]
struct PipelineRun {
    state: RunState,
    current_step: u32,
    methodology_ok: bool,
    fail_step: Option<u32>,
    details: Vec<String>,
    results: Vec<CheckResult>,
}

impl PipelineRun {
    fn start() -> Self {
        Self {
            state: RunState::Running,
            current_step: 1,
            methodology_ok: true,
            fail_step: None,
            details: vec!["✓ STEP 1: Mentions NHANES.".to_string()],
            results: Vec::new(),
        }
    }

    fn is_failed(&self) -> bool {
        self.state == RunState::Failed
    }

    fn fail(&mut self, step: u32) {
        if self.fail_step.is_none() {
            self.fail_step = Some(step);
        }
        self.state = RunState::Failed;
    }

    /// Close the current step and move to `next_step`.
    /// Returns false when the run must stop here.
    fn advance_to(&mut self, next_step: u32) -> bool {
        if self.current_step == METHODOLOGY_STEP && !self.methodology_ok {
            self.fail_step = Some(METHODOLOGY_STEP);
            self.state = RunState::Failed;
            self.details.push(format!(
                "❌ STEP {METHODOLOGY_STEP}: Methodology checks failed; later steps were not run."
            ));
            tracing::info!(step = METHODOLOGY_STEP, "Methodology step failed, halting run");
            return false;
        }

        if !self.is_failed() {
            self.details
                .push(format!("✓ STEP {}: Completed.", self.current_step));
        }
        tracing::debug!(from = self.current_step, to = next_step, "Step boundary");
        self.current_step = next_step;
        true
    }

    /// Record a non-skipped failure. Returns false when the run must stop now.
    fn record_failure(&mut self, check: &CheckDefinition, details: &str) -> bool {
        if check.step == METHODOLOGY_STEP {
            self.methodology_ok = false;
        }

        if !check.critical {
            self.details.push(format!(
                "⚠️ STEP {}: {} flagged an issue (non-critical): {details}",
                check.step, check.name
            ));
            return true;
        }

        self.fail(check.step);
        if !self
            .details
            .iter()
            .any(|d| d.starts_with(CRITICAL_FAILURE_PREFIX))
        {
            self.details.push(format!(
                "{CRITICAL_FAILURE_PREFIX} in STEP {}: {}. {details}",
                check.step, check.name
            ));
        }
        // Methodology failures are settled at the step boundary.
        check.step <= METHODOLOGY_STEP
    }

    fn finish(mut self, title: &str) -> Report {
        let (final_result, fail_step) = if self.is_failed() {
            let step = self.fail_step.unwrap_or(self.current_step);
            self.details
                .push(format!("❌ Manuscript failed at STEP {step}."));
            (FinalResult::Fail, step)
        } else {
            self.details
                .push(format!("✓ STEP {}: Completed.", self.current_step));
            self.details.push("✓ All critical checks passed.".to_string());
            (FinalResult::Pass, 0)
        };

        Report {
            title: title.to_string(),
            is_nhanes: true,
            final_result,
            details: self.details,
            check_results: self.results,
            fail_step,
        }
    }
}

/// Run the default rule table. Rule errors propagate to the caller.
pub fn run_checks(text: &str, title: &str) -> Result<Report, CheckError> {
    run_checks_with(DEFAULT_CHECKS, text, title)
}

/// Run an explicit rule table. `checks` must be ordered by non-decreasing step.
pub fn run_checks_with(
    checks: &[CheckDefinition],
    text: &str,
    title: &str,
) -> Result<Report, CheckError> {
    tracing::info!(
        title = %title,
        text_chars = text.chars().count(),
        checks = checks.len(),
        "Starting manuscript check"
    );

    if !mentions_nhanes(text) {
        tracing::info!(outcome = "not_nhanes", "Manuscript does not mention NHANES");
        return Ok(Report::not_nhanes(title));
    }

    let mut run = PipelineRun::start();

    for check in checks {
        if check.step > run.current_step && !run.advance_to(check.step) {
            break;
        }

        let verdict = (check.rule)(text).map_err(|e| match e {
            CheckError::Rule { .. } => e,
            other => CheckError::Rule {
                check: check.name.to_string(),
                reason: other.to_string(),
            },
        })?;

        tracing::debug!(
            check = %check.name,
            step = check.step,
            critical = check.critical,
            passed = verdict.passed,
            skipped = verdict.skipped,
            "Check executed"
        );

        let result = CheckResult::from_verdict(check.name, verdict);
        let failed = result.is_failure();
        let details = result.details.clone();
        run.results.push(result);

        if failed && !run.record_failure(check, &details) {
            break;
        }
    }

    let report = run.finish(title);
    log_report_outcome(&report);
    Ok(report)
}

/// Entry point: always returns a report. A rule error becomes an "Error" report.
pub fn check_manuscript(text: &str, title: Option<&str>) -> Report {
    check_manuscript_with(DEFAULT_CHECKS, text, title)
}

pub fn check_manuscript_with(
    checks: &[CheckDefinition],
    text: &str,
    title: Option<&str>,
) -> Report {
    let title = title.unwrap_or(DEFAULT_TITLE);
    match run_checks_with(checks, text, title) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Manuscript check aborted");
            Report::errored(title, &e.to_string())
        }
    }
}

fn log_report_outcome(report: &Report) {
    match report.final_result {
        FinalResult::Pass => {
            tracing::info!(
                outcome = "pass",
                checks_run = report.check_results.len(),
                flagged = report.failed_count(),
                "Manuscript check passed"
            );
        }
        FinalResult::Fail => {
            tracing::warn!(
                outcome = "fail",
                fail_step = report.fail_step,
                failed_checks = ?report.check_results.iter()
                    .filter(|r| r.is_failure())
                    .map(|r| r.check_name.as_str())
                    .collect::<Vec<_>>(),
                "Manuscript check failed"
            );
        }
        FinalResult::NotNhanes | FinalResult::Error => {}
    }
}
