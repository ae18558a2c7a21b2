//! Name many exchanges with a bounded pool of blocking workers.
//!
//! Keeps up to `max_concurrent` naming requests in flight; when one
//! finishes the next exchange is started until all are done.

use anyhow::Result;
use std::sync::Arc;

use crate::client::Transport;
use crate::error::NamingError;
use crate::message::Exchange;
use crate::pipeline::{NamingConfig, NamingPipeline};

/// Pool size used when the caller does not choose one.
pub const DEFAULT_WORKERS: usize = 5;

/// Names every exchange, returning one outcome per input in input order.
///
/// Each request runs on tokio's blocking pool because the client blocks its
/// thread. A failed item does not stop the others; only a panicked worker
/// fails the whole batch.
pub async fn name_all<T>(
    pipeline: Arc<NamingPipeline<T>>,
    exchanges: Vec<Exchange>,
    config: Arc<NamingConfig>,
    max_concurrent: usize,
) -> Result<Vec<Result<String, NamingError>>>
where
    T: Transport + Send + Sync + 'static,
{
    let max_concurrent = max_concurrent.max(1);
    let mut results: Vec<Option<Result<String, NamingError>>> =
        std::iter::repeat_with(|| None).take(exchanges.len()).collect();
    let mut pending = exchanges.into_iter().enumerate();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some((index, exchange)) = pending.next() else {
                break;
            };
            let pipeline = Arc::clone(&pipeline);
            let config = Arc::clone(&config);
            join_set.spawn_blocking(move || (index, pipeline.name_for(&exchange, &config)));
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let (index, outcome) = res.map_err(|e| anyhow::anyhow!("naming task join: {}", e))?;
        match &outcome {
            Ok(label) => tracing::info!(index, "named: {}", label),
            Err(e) => tracing::warn!(index, "naming failed: {}", e),
        }
        results[index] = Some(outcome);
    }

    Ok(results.into_iter().flatten().collect())
}
