//! Header redaction, applied only when headers are included in a prompt.

use super::rules::{HEADER_RULES, REDACTION_MARKER};

/// Copies `headers`, replacing the value of every sensitive header with the
/// redaction marker.
pub fn sanitize_headers(headers: &[(String, String)]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if HEADER_RULES.matches(name) {
                REDACTION_MARKER.to_string()
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect()
}
