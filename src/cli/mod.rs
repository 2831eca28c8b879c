pub mod args;
pub mod commands;
pub mod logging;
pub mod report;

pub use args::{Cli, Commands};
pub use commands::run;
