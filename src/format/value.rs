//! Dynamically typed values exchanged with format handlers.

use num_bigint::BigInt;
use serde_json::Value;
use std::fmt;

/// A value flowing through a schema pipeline.
///
/// Input data arrives untyped (usually as JSON), so handlers receive a
/// `FormatValue` and check its type themselves. After a successful
/// deserialize the bigint handler only ever produces [`FormatValue::BigInt`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormatValue {
    Null,
    Boolean(bool),
    /// A machine integer, as produced by a JSON integer literal
    Integer(i64),
    /// A floating-point number
    Number(f64),
    String(String),
    /// An arbitrary-precision integer
    BigInt(BigInt),
    /// JSON arrays and objects, carried through untouched
    Other(Value),
}

impl FormatValue {
    /// The observed-type word used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FormatValue::Null => "null",
            FormatValue::Boolean(_) => "boolean",
            FormatValue::Integer(_) | FormatValue::Number(_) => "number",
            FormatValue::String(_) => "string",
            FormatValue::BigInt(_) => "bigint",
            FormatValue::Other(_) => "object",
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            FormatValue::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_bigint(self) -> Option<BigInt> {
        match self {
            FormatValue::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_bigint(&self) -> bool {
        matches!(self, FormatValue::BigInt(_))
    }

    /// The value as an integer usable in range comparisons, if it has one.
    pub fn to_integer(&self) -> Option<BigInt> {
        match self {
            FormatValue::BigInt(n) => Some(n.clone()),
            FormatValue::Integer(n) => Some(BigInt::from(*n)),
            _ => None,
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Null => write!(f, "null"),
            FormatValue::Boolean(b) => write!(f, "{b}"),
            FormatValue::Integer(n) => write!(f, "{n}"),
            FormatValue::Number(n) => write!(f, "{n}"),
            FormatValue::String(s) => write!(f, "{s}"),
            FormatValue::BigInt(n) => write!(f, "{n}"),
            FormatValue::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<Value> for FormatValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FormatValue::Null,
            Value::Bool(b) => FormatValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FormatValue::Integer(i),
                None => FormatValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FormatValue::String(s),
            other => FormatValue::Other(other),
        }
    }
}

impl From<&Value> for FormatValue {
    fn from(value: &Value) -> Self {
        FormatValue::from(value.clone())
    }
}

impl From<BigInt> for FormatValue {
    fn from(value: BigInt) -> Self {
        FormatValue::BigInt(value)
    }
}

impl From<i64> for FormatValue {
    fn from(value: i64) -> Self {
        FormatValue::Integer(value)
    }
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        FormatValue::Number(value)
    }
}

impl From<bool> for FormatValue {
    fn from(value: bool) -> Self {
        FormatValue::Boolean(value)
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        FormatValue::String(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        FormatValue::String(value)
    }
}
