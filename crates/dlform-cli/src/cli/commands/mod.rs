//! CLI command handlers, one file per command.

mod check_url;
mod run;

pub use check_url::run_check_url;
pub use run::run_scenario;
