use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A loosely-typed payload scalar carried through to the ERP untouched.
///
/// Quantities, prices and totals arrive as whatever the shop sent (numbers,
/// numeric strings, sometimes garbage). They are never validated or
/// recomputed here, only rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    /// Value of `key` in `object`, or `default` when the key is missing or null.
    pub fn from_field(object: &Value, key: &str, default: Value) -> Self {
        match object.get(key) {
            Some(Value::Null) | None => FieldValue(default),
            Some(value) => FieldValue(value.clone()),
        }
    }

    #[cfg(test)]
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.0))
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue(value)
    }
}

/// Null, `false`, zero and empty strings/collections are not truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings render as their content; everything else as compact JSON.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
