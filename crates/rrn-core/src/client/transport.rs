//! HTTP transport for the chat-completion POST.

use curl::easy::{Easy, List};
use std::time::Duration;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Sends one JSON POST. Any error returned is a transport failure
/// (connect, timeout, interrupted transfer); HTTP statuses are not errors here.
pub trait Transport {
    fn post_json(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &[u8],
        timeout: Duration,
    ) -> Result<HttpReply, curl::Error>;
}

/// libcurl transport. A fresh easy handle per call, so nothing is shared
/// between calls or threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn post_json(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &[u8],
        timeout: Duration,
    ) -> Result<HttpReply, curl::Error> {
        let mut easy = Easy::new();
        easy.url(endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.timeout(timeout)?;

        let mut list = List::new();
        list.append("Content-Type: application/json")?;
        list.append(&format!("Authorization: Bearer {api_key}"))?;
        // No 100-continue round trip for larger prompts.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        let mut response = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpReply {
            status,
            body: response,
        })
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn post_json(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &[u8],
        timeout: Duration,
    ) -> Result<HttpReply, curl::Error> {
        (**self).post_json(endpoint, api_key, body, timeout)
    }
}
