//! CLI command handlers, one file per command.

mod config;
mod name;
mod prompt;
mod redact;

pub use config::{run_config_set, run_config_show};
pub use name::run_name;
pub use prompt::run_prompt;
pub use redact::{run_redact_body, run_redact_url};
