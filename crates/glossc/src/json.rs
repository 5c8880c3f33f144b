//! JSON to runtime-value conversion.
//!
//! Objects become maps (in the parser's entry order), arrays become lists,
//! scalars become the matching scalar values. Numbers that fit `i64` stay
//! integers; everything else goes through `f64`.

use gloss_ir::Value;

/// Convert a parsed JSON document into a printable value.
pub fn to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::None,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(n) => Value::int(n),
            None => Value::float(number.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::str(s.clone()),
        serde_json::Value::Array(items) => Value::list(items.iter().map(to_value).collect()),
        serde_json::Value::Object(entries) => Value::map(
            entries
                .iter()
                .map(|(key, value)| (Value::str(key.clone()), to_value(value)))
                .collect(),
        ),
    }
}
