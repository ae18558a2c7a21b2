//! Redact → prompt → chat-completion, for one captured exchange.

use crate::client::{ApiSettings, CurlTransport, NamingClient, Transport};
use crate::error::NamingError;
use crate::message::{Exchange, HttpMessage};
use crate::prompt::{build_prompt, PromptOptions, SanitizedRequest, SanitizedResponse};
use crate::redact::{sanitize_body, sanitize_headers, sanitize_url};
use crate::retry::RetryPolicy;

/// Everything a naming request needs, passed by value per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    pub api: ApiSettings,
    pub retry: RetryPolicy,
    pub prompt: PromptOptions,
}

/// Stateless naming entry point. Safe to share between worker threads.
#[derive(Debug, Clone)]
pub struct NamingPipeline<T> {
    client: NamingClient<T>,
}

impl NamingPipeline<CurlTransport> {
    pub fn with_curl() -> Self {
        Self::new(CurlTransport)
    }
}

impl<T: Transport> NamingPipeline<T> {
    pub fn new(transport: T) -> Self {
        Self {
            client: NamingClient::new(transport),
        }
    }

    /// Names `exchange`. Blocks until the endpoint answers or the retry
    /// budget is spent.
    pub fn name_for(&self, exchange: &Exchange, config: &NamingConfig) -> Result<String, NamingError> {
        let prompt = render_prompt(exchange, &config.prompt);
        tracing::debug!("prompt:\n{}", prompt);
        self.client
            .generate_name(&prompt, &config.api, &config.retry)
    }
}

/// The exact text that would be sent for `exchange`.
pub fn render_prompt(exchange: &Exchange, opts: &PromptOptions) -> String {
    let request = sanitize_request(&exchange.request, opts.include_headers);
    let response = exchange
        .response
        .as_ref()
        .map(|r| sanitize_response(r, opts.include_headers));
    build_prompt(&request, response.as_ref(), opts)
}

fn sanitize_request(msg: &impl HttpMessage, include_headers: bool) -> SanitizedRequest {
    SanitizedRequest {
        url: sanitize_url(msg.url()),
        headers: included_headers(msg, include_headers),
        body: sanitize_body(msg.body_text(), msg.content_type()),
    }
}

fn sanitize_response(msg: &impl HttpMessage, include_headers: bool) -> SanitizedResponse {
    SanitizedResponse {
        content_type: msg.content_type().map(str::to_string),
        headers: included_headers(msg, include_headers),
        body: sanitize_body(msg.body_text(), msg.content_type()),
    }
}

fn included_headers(msg: &impl HttpMessage, include: bool) -> Vec<(String, String)> {
    if include {
        sanitize_headers(msg.headers())
    } else {
        Vec::new()
    }
}
