pub mod config;
pub mod error;
pub mod logging;

pub mod batch;
pub mod client;
pub mod har;
pub mod label;
pub mod message;
pub mod pipeline;
pub mod prompt;
pub mod redact;
pub mod retry;
