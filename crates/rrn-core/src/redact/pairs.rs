//! `name=value&name=value` redaction for query strings and form bodies.

use url::form_urlencoded;

use super::rules::{RuleSet, REDACTION_MARKER};

/// Redacts every `key=value` pair in `raw` whose key matches `rules`.
///
/// Pairs are split on `&` and then on the first `=`. The key is form-decoded
/// for matching only; the output keeps the raw key as written. Pairs without
/// `=` and non-matching pairs are copied through byte for byte.
pub fn redact_pairs(raw: &str, rules: &RuleSet) -> String {
    raw.split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if rules.matches(&decode_key(key)) => {
                format!("{key}={REDACTION_MARKER}")
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_key(key: &str) -> String {
    form_urlencoded::parse(key.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .unwrap_or_default()
}
