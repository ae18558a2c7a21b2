//! Request/response body sanitization by content type.

use super::json::try_sanitize_json;
use super::pairs::redact_pairs;
use super::rules::BODY_RULES;

/// Body encodings the redactor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Form,
    Json,
}

impl BodyKind {
    /// Sniffs the encoding from a `Content-Type` value by prefix
    /// (ASCII case-insensitive, parameters such as `charset` ignored).
    pub fn sniff(content_type: &str) -> Option<Self> {
        let ct = content_type.trim_start();
        if starts_with_ignore_case(ct, "application/x-www-form-urlencoded") {
            Some(BodyKind::Form)
        } else if starts_with_ignore_case(ct, "application/json") {
            Some(BodyKind::Json)
        } else {
            None
        }
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Redacts sensitive fields in `body` according to `content_type`.
///
/// Bodies without a content type, empty bodies and unknown encodings are
/// returned as they are. A JSON body that does not parse is returned
/// unchanged and a warning is logged.
pub fn sanitize_body(body: &str, content_type: Option<&str>) -> String {
    let Some(content_type) = content_type else {
        return body.to_string();
    };
    if body.is_empty() {
        return String::new();
    }
    match BodyKind::sniff(content_type) {
        Some(BodyKind::Form) => redact_pairs(body, &BODY_RULES),
        Some(BodyKind::Json) => try_sanitize_json(body).unwrap_or_else(|e| {
            tracing::warn!("body sanitize error: {}", e);
            body.to_string()
        }),
        None => body.to_string(),
    }
}
