pub mod checks;
pub mod orchestrator;
pub mod rules;
pub mod sections;
pub mod topics;
pub mod types;

pub use orchestrator::{check_manuscript, run_checks, DEFAULT_TITLE};
pub use types::{CheckDefinition, CheckError, RuleFn};
