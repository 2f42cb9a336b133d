//! Lookup helpers for backend records whose field names drift.
//!
//! The backend is not consistent about field names (`policyType` vs
//! `policy_type` vs `type`, `agentId` vs `id`, ...). These helpers walk a list
//! of candidate keys and return the first one holding a meaningful value, where
//! `null`, `""`, `false` and `0` count as absent.

use serde_json::Value;

/// Whether a JSON value carries something worth reading.
pub(crate) fn present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read `key` from an object, or a numeric index from an array row.
fn lookup<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    match raw {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// First present value among `keys`, in order.
pub(crate) fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| lookup(raw, key))
        .find(|value| present(value))
}

/// Render a scalar as text; ids often arrive as numbers.
pub(crate) fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn text_field(raw: &Value, keys: &[&str]) -> Option<String> {
    first_present(raw, keys).and_then(as_text)
}

pub(crate) fn number_field(raw: &Value, keys: &[&str]) -> Option<f64> {
    match first_present(raw, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
