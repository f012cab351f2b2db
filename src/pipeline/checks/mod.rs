pub mod author_flags;
pub mod citation;
pub mod date_range;
pub mod placeholder;
pub mod presence;
pub mod title_template;

pub use author_flags::check_author_red_flags;
pub use citation::check_nhanes_citation;
pub use date_range::{check_date_range, check_nhanes_date_range};
pub use placeholder::{check_survey_design_acknowledgment, check_weighting_methodology};
pub use presence::mentions_nhanes;
pub use title_template::check_title_template;
