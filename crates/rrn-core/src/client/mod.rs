//! Chat-completion client that turns a prompt into a label.
//!
//! One POST per attempt, `Authorization: Bearer <key>`, JSON body
//! `{"model": .., "messages": [{"role": "user", "content": ..}]}`. Non-200
//! replies are retried per [`RetryPolicy`]; transport and shape errors are not.
//! The client keeps no state between calls and can be shared across threads.

mod transport;
mod wire;

pub use transport::{CurlTransport, HttpReply, Transport};
pub use wire::{ChatMessage, ChatRequest};

use std::time::Duration;

use crate::error::NamingError;
use crate::label::clean_label;
use crate::retry::{run_with_retry, RetryPolicy};

/// Per-attempt timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where and how to call the chat-completion endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct NamingClient<T> {
    transport: T,
}

impl<T: Transport> NamingClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Sends `prompt` and returns the cleaned label.
    ///
    /// Blocks the calling thread for at most `retry.max_attempts` attempts of
    /// `api.timeout` each, plus any configured backoff.
    pub fn generate_name(
        &self,
        prompt: &str,
        api: &ApiSettings,
        retry: &RetryPolicy,
    ) -> Result<String, NamingError> {
        let payload = serde_json::to_vec(&ChatRequest::user(&api.model, prompt))
            .map_err(|e| NamingError::ResponseShape(format!("encode request: {e}")))?;

        let reply = run_with_retry(retry, NamingError::kind, |attempt| -> Result<HttpReply, NamingError> {
            let reply = self
                .transport
                .post_json(&api.endpoint, &api.api_key, &payload, api.timeout)?;
            tracing::debug!(attempt, status = reply.status, "chat-completion reply");
            if reply.status == 200 {
                Ok(reply)
            } else {
                Err(wire::parse_api_error(reply.status, &reply.body))
            }
        })?;

        let content = wire::parse_content(&reply.body)?;
        Ok(clean_label(&content))
    }
}
