//! Redaction of credentials and secrets from captured traffic.
//!
//! Sensitive fields are found by case-insensitive substring match of their
//! name against a fixed rule set, and their value is replaced by
//! [`REDACTION_MARKER`]. Redaction is idempotent. Inputs that cannot be
//! parsed are passed through unchanged and a warning is logged.

mod body;
mod headers;
mod json;
mod pairs;
mod query;
mod rules;

pub use body::{sanitize_body, BodyKind};
pub use headers::sanitize_headers;
pub use json::redact_value;
pub use pairs::redact_pairs;
pub use query::{sanitize_url, HOST_PLACEHOLDER};
pub use rules::{RuleSet, Scope, BODY_RULES, HEADER_RULES, QUERY_RULES, REDACTION_MARKER};
