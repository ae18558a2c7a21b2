//! `rrn name <har>` – name captured requests.

use anyhow::Result;
use rrn_core::batch;
use rrn_core::config::RrnConfig;
use rrn_core::har;
use rrn_core::pipeline::NamingPipeline;
use std::path::Path;
use std::sync::Arc;

/// Prints `index<TAB>label<TAB>url` per entry. A failed entry gets `-` as
/// its label and the error goes to stderr and the log.
pub async fn run_name(cfg: &RrnConfig, path: &Path, entry: Option<usize>, jobs: usize) -> Result<()> {
    let naming = Arc::new(cfg.naming_config()?);
    let exchanges = har::load_exchanges(path)?;
    let total = exchanges.len();

    let selected: Vec<(usize, _)> = match entry {
        Some(i) if i >= total => anyhow::bail!("entry {i} out of range (HAR has {total} entries)"),
        Some(i) => exchanges.into_iter().enumerate().skip(i).take(1).collect(),
        None => exchanges.into_iter().enumerate().collect(),
    };
    let (indices, exchanges): (Vec<usize>, Vec<_>) = selected.into_iter().unzip();
    let urls: Vec<String> = exchanges.iter().map(|e| e.request.url.clone()).collect();
    let count = exchanges.len();

    let pipeline = Arc::new(NamingPipeline::with_curl());
    let results = batch::name_all(pipeline, exchanges, naming, jobs).await?;

    let mut failed = 0usize;
    for ((index, url), outcome) in indices.into_iter().zip(urls).zip(results) {
        match outcome {
            Ok(label) => println!("{index}\t{label}\t{url}"),
            Err(e) => {
                failed += 1;
                tracing::error!(index, "no label, falling back: {}", e);
                eprintln!("entry {index}: {e}");
                println!("{index}\t-\t{url}");
            }
        }
    }
    if failed > 0 {
        eprintln!("{failed} of {count} entries could not be named");
    }
    Ok(())
}
