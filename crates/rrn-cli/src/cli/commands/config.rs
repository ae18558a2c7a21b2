//! `rrn config show|set` – API settings.

use anyhow::Result;
use rrn_core::config::{self, mask_key};
use std::path::Path;

pub fn run_config_show(path: &Path) -> Result<()> {
    let cfg = config::load_file_or_init(path)?;
    println!("config:   {}", path.display());
    println!("endpoint: {}", cfg.api.endpoint);
    println!("api_key:  {}", mask_key(&cfg.api.api_key));
    println!("model:    {}", cfg.api.model);
    println!("timeout:  {}s", cfg.api.timeout_secs);
    let retry = cfg.retry.unwrap_or_default();
    println!(
        "retry:    {} attempts, {}ms base delay",
        retry.max_attempts, retry.base_delay_ms
    );
    println!(
        "prompt:   {} words max, {}, headers {}",
        cfg.prompt.max_words,
        cfg.prompt.language,
        if cfg.prompt.include_headers { "included" } else { "omitted" }
    );
    Ok(())
}

pub fn run_config_set(
    path: &Path,
    endpoint: Option<&str>,
    api_key: Option<&str>,
    model: Option<&str>,
) -> Result<()> {
    if endpoint.is_none() && api_key.is_none() && model.is_none() {
        anyhow::bail!("nothing to set (use --endpoint, --api-key or --model)");
    }
    let mut cfg = config::load_file_or_init(path)?;
    cfg.update(endpoint, api_key, model);
    config::save_to(path, &cfg)?;
    tracing::info!("saved settings to {}", path.display());
    println!("Saved settings to {}", path.display());
    Ok(())
}
