//! `rrn prompt <har>` – show what would be sent for one entry.

use anyhow::Result;
use rrn_core::config::RrnConfig;
use rrn_core::har;
use rrn_core::pipeline::render_prompt;
use std::path::Path;

pub fn run_prompt(cfg: &RrnConfig, path: &Path, entry: usize) -> Result<()> {
    let exchanges = har::load_exchanges(path)?;
    let Some(exchange) = exchanges.get(entry) else {
        anyhow::bail!("entry {entry} out of range (HAR has {} entries)", exchanges.len());
    };
    println!("{}", render_prompt(exchange, &cfg.prompt));
    Ok(())
}
