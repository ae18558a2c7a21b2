use std::time::Duration;

/// High-level classification of a naming failure for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused, reset, DNS, etc.).
    Connection,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// Client-side HTTP status other than 429.
    Http4xx(u16),
    /// Server-side HTTP status other than 503.
    Http5xx(u16),
    /// Any other non-200 status.
    HttpOther(u16),
    /// Body did not have the expected JSON shape.
    ResponseShape,
    /// Any other transport error.
    Other,
}

impl ErrorKind {
    /// True for failures the endpoint itself reported with a status code.
    pub fn is_api_status(self) -> bool {
        matches!(
            self,
            ErrorKind::Throttled
                | ErrorKind::Http4xx(_)
                | ErrorKind::Http5xx(_)
                | ErrorKind::HttpOther(_)
        )
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay (may be zero).
    RetryAfter(Duration),
}

/// Bounded retry with optional exponential backoff.
///
/// The default base delay is zero, so retries are immediate. Set
/// `base_delay` to enable backoff; it doubles per attempt up to `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first). Zero still makes one attempt.
    pub max_attempts: u32,
    /// Base delay for backoff.
    pub base_delay: Duration,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::ZERO,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Immediate retries with the given budget.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Decide what to do after attempt number `attempt` (1-based) failed with `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts || !kind.is_api_status() {
            return RetryDecision::NoRetry;
        }
        let exp = 1u32 << attempt.saturating_sub(1).min(8);
        let delay = self.base_delay.saturating_mul(exp).min(self.max_delay);
        RetryDecision::RetryAfter(delay)
    }
}
