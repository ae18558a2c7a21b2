//! Retry loop: run a closure until success or the policy says stop.

use super::policy::{ErrorKind, RetryDecision, RetryPolicy};

/// Runs `f` until it succeeds or `policy` refuses another attempt.
///
/// `f` receives the 1-based attempt number. `classify` maps its error into an
/// [`ErrorKind`]. Sleeps for the decided delay between attempts (skipped when
/// zero). Blocks the calling thread.
pub fn run_with_retry<T, E, F, C>(policy: &RetryPolicy, classify: C, mut f: F) -> Result<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
    C: Fn(&E) -> ErrorKind,
    E: std::fmt::Display,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt, classify(&e)) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!(attempt, delay_ms = d.as_millis() as u64, "retrying: {}", e);
                    if !d.is_zero() {
                        std::thread::sleep(d);
                    }
                    attempt += 1;
                }
            },
        }
    }
}
