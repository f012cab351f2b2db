pub mod report;
pub mod verdict;

pub use report::*;
pub use verdict::*;
