use thiserror::Error;

use crate::models::CheckVerdict;

/// A rule: a pure function of the manuscript text.
///
/// "Pattern not found" is a verdict, never an `Err`; errors are reserved for
/// conditions the rule cannot interpret at all.
pub type RuleFn = fn(&str) -> Result<CheckVerdict, CheckError>;

/// One row of the ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct CheckDefinition {
    pub name: &'static str,
    pub rule: RuleFn,
    /// Step group, starting at 2 (step 1 is the presence gate). Non-decreasing
    /// across the table.
    pub step: u32,
    /// Failure of a critical check forces the run to Fail.
    pub critical: bool,
}

/// Unexpected rule failures. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Check '{check}' failed unexpectedly: {reason}")]
    Rule { check: String, reason: String },

    #[error("Invalid year value: {0}")]
    InvalidYear(String),
}
