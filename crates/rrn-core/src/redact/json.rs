//! JSON body redaction as a pure transform.
//!
//! Bodies may nest arbitrarily deep, so nothing here recurses on a fixed
//! stack: `serde_stacker` grows it while parsing and `stacker` while walking.

use serde::Deserialize;
use serde_json::Value;

use super::rules::{RuleSet, BODY_RULES, REDACTION_MARKER};
use crate::error::NamingError;

/// Remaining stack below which a walk switches to a fresh segment.
const RED_ZONE: usize = 64 * 1024;
/// Size of each extra stack segment.
const STACK_GROWTH: usize = 1024 * 1024;

/// Returns a copy of `value` where every object key matching `rules`, at any
/// depth and inside arrays, has its value replaced by the redaction marker.
/// Scalars inside arrays are left as they are.
pub fn redact_value(value: &Value, rules: &RuleSet) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let v = if rules.matches(k) {
                        Value::String(REDACTION_MARKER.to_string())
                    } else {
                        redact_value(v, rules)
                    };
                    (k.clone(), v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|v| redact_value(v, rules)).collect()),
        scalar => scalar.clone(),
    })
}

/// Parses `body`, redacts it with the body rule set and re-serializes it compactly.
pub(crate) fn try_sanitize_json(body: &str) -> Result<String, NamingError> {
    let parsed = parse_unbounded(body)?;
    let redacted = redact_value(&parsed, &BODY_RULES);
    let mut out = String::with_capacity(body.len());
    write_compact(&redacted, &mut out);
    dismantle(parsed);
    dismantle(redacted);
    Ok(out)
}

fn parse_unbounded(body: &str) -> Result<Value, NamingError> {
    let malformed = |e: serde_json::Error| NamingError::MalformedInput(format!("JSON body: {e}"));
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(malformed)?;
    if let Err(e) = de.end() {
        dismantle(value);
        return Err(malformed(e));
    }
    Ok(value)
}

/// Same output as `serde_json::to_string`, without recursing on the caller's stack.
fn write_compact(value: &Value, out: &mut String) {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || match value {
        Value::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::from(k.as_str()).to_string());
                out.push(':');
                write_compact(v, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_compact(v, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    })
}

/// Drops a tree leaf-first so deep nesting never recurses in `Drop`.
fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(v) = pending.pop() {
        match v {
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            Value::Array(items) => pending.extend(items),
            _ => {}
        }
    }
}
