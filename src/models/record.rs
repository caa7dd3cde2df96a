use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A decoded response object: field name to raw value
pub type Record = Map<String, Value>;

/// A present scalar field, kept exactly as the upstream record held it.
/// Ids and ratings arrive as numbers from JSON and as text from XML attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// The value as an unsigned integer, parsing numeric text
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Scalar::Number(n) => n.as_u64(),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }

    /// The value as a signed integer, parsing numeric text
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Number(n) => n.as_i64(),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Number(n) => Value::Number(n),
            Scalar::Text(s) => Value::String(s),
            Scalar::Bool(b) => Value::Bool(b),
        }
    }
}

/// Short name of a value's JSON type, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Removes `key` from the record if it holds a string.
/// A value of any other type is left in place so it is retained as an extra field.
pub fn take_text(record: &mut Record, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(_)) => match record.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        Some(Value::Null) => {
            record.remove(key);
            None
        }
        _ => None,
    }
}

/// Removes `key` from the record if it holds any scalar.
/// Arrays and objects stay in place as extra fields.
pub fn take_scalar(record: &mut Record, key: &str) -> Option<Scalar> {
    match record.get(key) {
        Some(Value::Array(_)) | Some(Value::Object(_)) | None => None,
        Some(_) => match record.remove(key) {
            Some(Value::Number(n)) => Some(Scalar::Number(n)),
            Some(Value::String(s)) => Some(Scalar::Text(s)),
            Some(Value::Bool(b)) => Some(Scalar::Bool(b)),
            _ => None,
        },
    }
}

/// Renders an optional value, with `null` standing in for an absent one
pub fn display_opt<T: fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
