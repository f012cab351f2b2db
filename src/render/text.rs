use std::fmt::Write;

use super::ReportRenderer;
use crate::models::{CheckResult, FinalResult, Report};

/// Human-readable terminal output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    fn headline(report: &Report) -> String {
        match report.final_result {
            FinalResult::Pass => "PASS".to_string(),
            FinalResult::Fail => format!("FAIL (step {})", report.fail_step),
            FinalResult::NotNhanes => "NOT NHANES".to_string(),
            FinalResult::Error => "ERROR".to_string(),
        }
    }

    fn tag(result: &CheckResult) -> &'static str {
        if result.skipped {
            "[SKIP]"
        } else if result.passed {
            "[PASS]"
        } else {
            "[FAIL]"
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}: {}", report.title, Self::headline(report));
        out.push('\n');

        for line in &report.details {
            let _ = writeln!(out, "  {line}");
        }
        out.push('\n');

        if report.check_results.is_empty() {
            out.push_str("No checks were run.\n");
            return out;
        }

        let _ = writeln!(
            out,
            "Checks: {} passed, {} failed, {} skipped",
            report.passed_count(),
            report.failed_count(),
            report.skipped_count()
        );
        for result in &report.check_results {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                Self::tag(result),
                result.check_name,
                result.details
            );
        }
        out
    }
}
