use super::ReportRenderer;
use crate::models::Report;

/// Pretty-printed JSON using the report's wire field names.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        match serde_json::to_string_pretty(report) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize report");
                error_document(&e.to_string())
            }
        }
    }
}

/// Stand-in document when the report itself cannot be serialized.
fn error_document(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckResult, CheckVerdict, FinalResult};

    #[test]
    fn uses_wire_field_names() {
        let report = Report {
            title: "T".into(),
            is_nhanes: true,
            final_result: FinalResult::Fail,
            details: vec!["❌ Manuscript failed at STEP 2.".into()],
            check_results: vec![CheckResult::from_verdict(
                "Weighting Methodology",
                CheckVerdict::skipped("later"),
            )],
            fail_step: 2,
        };
        let value: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(value["isNHANES"], true);
        assert_eq!(value["finalResult"], "Fail");
        assert_eq!(value["failStep"], 2);
        assert_eq!(value["checkResults"][0]["checkName"], "Weighting Methodology");
        assert_eq!(value["checkResults"][0]["skipped"], true);
    }

    #[test]
    fn error_document_escapes_message() {
        let doc = error_document(r#"key "title" is not "valid""#);
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["error"], r#"key "title" is not "valid""#);
    }

    #[test]
    fn not_nhanes_label_has_space() {
        let value: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&Report::not_nhanes("T"))).unwrap();
        assert_eq!(value["finalResult"], "Not NHANES");
        assert_eq!(value["isNHANES"], false);
    }
}
