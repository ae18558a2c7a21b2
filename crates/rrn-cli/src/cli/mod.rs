//! CLI for the RRN request renamer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rrn_core::batch::DEFAULT_WORKERS;
use rrn_core::config;
use std::path::Path;

use commands::{
    run_config_set, run_config_show, run_name, run_prompt, run_redact_body, run_redact_url,
};

/// Top-level CLI for the RRN request renamer.
#[derive(Debug, Parser)]
#[command(name = "rrn")]
#[command(about = "RRN: short LLM-generated names for captured HTTP requests, secrets redacted", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Name the requests captured in a HAR file.
    Name {
        /// Path to the HAR file.
        path: String,
        /// Only name entry N (0-based) instead of every entry.
        #[arg(long, value_name = "N")]
        entry: Option<usize>,
        /// Name up to N entries concurrently.
        #[arg(long, default_value_t = DEFAULT_WORKERS, value_name = "N")]
        jobs: usize,
    },

    /// Print the redacted prompt for a HAR entry without calling the API.
    Prompt {
        /// Path to the HAR file.
        path: String,
        /// Entry index (0-based).
        #[arg(long, default_value = "0", value_name = "N")]
        entry: usize,
    },

    /// Print a URL with its host replaced and sensitive query values redacted.
    RedactUrl {
        url: String,
    },

    /// Print a form or JSON body with sensitive fields redacted.
    RedactBody {
        body: String,
        /// Content-Type of the body (e.g. application/json).
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Show or change API settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the settings file (API key masked).
    Show,
    /// Update API settings and save them.
    Set {
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        model: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Name { path, entry, jobs } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_name(&cfg, Path::new(&path), entry, jobs).await?;
            }
            CliCommand::Prompt { path, entry } => {
                let cfg = config::load_or_init()?;
                run_prompt(&cfg, Path::new(&path), entry)?;
            }
            CliCommand::RedactUrl { url } => run_redact_url(&url),
            CliCommand::RedactBody { body, content_type } => {
                run_redact_body(&body, content_type.as_deref());
            }
            CliCommand::Config { action } => {
                let path = config::config_path()?;
                match action {
                    ConfigAction::Show => run_config_show(&path)?,
                    ConfigAction::Set {
                        endpoint,
                        api_key,
                        model,
                    } => run_config_set(
                        &path,
                        endpoint.as_deref(),
                        api_key.as_deref(),
                        model.as_deref(),
                    )?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
