//! Retry policy for the chat-completion call.
//!
//! Classifies failures (API status, transport, response shape) and decides
//! whether another attempt is made, and after what delay. Only API-reported
//! failures are retried; transport and shape errors surface immediately.

mod classify;
mod policy;
mod run;

pub use classify::{classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
