//! Report presentation. The core returns a `Report`; how it is shown is up to
//! the renderer the host picks.

pub mod json;
pub mod text;

use crate::models::Report;

pub use json::JsonRenderer;
pub use text::TextRenderer;

pub trait ReportRenderer {
    fn render(&self, report: &Report) -> String;
}
