//! Read-only view of captured HTTP messages.
//!
//! The capture source (HAR file, proxy, etc.) supplies these; the pipeline
//! only reads them.

/// One side of a captured exchange.
pub trait HttpMessage {
    /// Full URL. Empty for responses.
    fn url(&self) -> &str;

    /// All headers in capture order.
    fn headers(&self) -> &[(String, String)];

    /// Body decoded as text.
    fn body_text(&self) -> &str;

    /// First header named `name` (ASCII case-insensitive).
    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}

/// Owned captured message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedMessage {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedMessage {
    pub fn request(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn response() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl HttpMessage for CapturedMessage {
    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn body_text(&self) -> &str {
        &self.body
    }
}

/// A request and, if one was captured, its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub request: CapturedMessage,
    pub response: Option<CapturedMessage>,
}

impl Exchange {
    pub fn new(request: CapturedMessage, response: Option<CapturedMessage>) -> Self {
        Self { request, response }
    }
}
