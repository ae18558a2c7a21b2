//! Chat-completion JSON shapes.

use serde::{Deserialize, Serialize};

use crate::error::NamingError;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Single user message.
    pub fn user(model: &'a str, content: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// `choices[0].message.content` of a 200 reply.
pub(super) fn parse_content(body: &[u8]) -> Result<String, NamingError> {
    let resp: ChatResponse = serde_json::from_slice(body)
        .map_err(|e| NamingError::ResponseShape(format!("JSON parsing failed: {e}")))?;
    resp.choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| NamingError::ResponseShape("reply has no choices".to_string()))
}

/// `error.message` of a non-200 reply as an API error. Any other body shape is
/// a [`NamingError::ResponseShape`].
pub(super) fn parse_api_error(status: u32, body: &[u8]) -> NamingError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(b) => NamingError::Api {
            status,
            message: b.error.message,
        },
        Err(e) => NamingError::ResponseShape(format!("HTTP {status} error body: {e}")),
    }
}
