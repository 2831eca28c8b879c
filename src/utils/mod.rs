pub mod constants;
pub mod month;
pub mod progress;

pub use constants::*;
pub use month::parse_month_label;
pub use progress::ProgressReporter;
