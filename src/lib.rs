pub mod cli;
pub mod config;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod render;

pub use models::{CheckResult, CheckVerdict, FinalResult, Report};
pub use pipeline::{check_manuscript, run_checks};

/// Binary entry: parse arguments, check the manuscript, return the exit code.
pub fn run() -> i32 {
    cli::run()
}
