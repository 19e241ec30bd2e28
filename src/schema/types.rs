//! Core schema type definitions.
//!
//! This module contains the data structures handed to format handlers: the
//! bound descriptor of a compiled schema, the primitive data types formats
//! attach to, and the schema dialects a registry serves.

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Range constraints of a compiled schema.
///
/// This is the entire contract surface between a schema and a numeric format
/// handler. An absent bound means the value is unbounded on that side. The
/// descriptor does not check that `minimum <= maximum`; that is done when a
/// schema object is compiled.
///
/// Bounds deserialize from either decimal strings or JSON integers, so both
/// `{"minimum": "0"}` and `{"minimum": 0}` are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescriptor {
    /// Upper bound
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_bound",
        serialize_with = "serialize_bound"
    )]
    pub maximum: Option<BigInt>,
    /// Lower bound
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_bound",
        serialize_with = "serialize_bound"
    )]
    pub minimum: Option<BigInt>,
    /// Whether `maximum` itself is excluded
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,
    /// Whether `minimum` itself is excluded
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,
}

impl SchemaDescriptor {
    /// Create a descriptor with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maximum(mut self, maximum: impl Into<BigInt>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }

    pub fn with_minimum(mut self, minimum: impl Into<BigInt>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    pub fn with_exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = exclusive;
        self
    }

    pub fn with_exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = exclusive;
        self
    }

    pub fn has_maximum(&self) -> bool {
        self.maximum.is_some()
    }

    pub fn has_minimum(&self) -> bool {
        self.minimum.is_some()
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Read an integer bound given as a JSON integer or a decimal string.
pub(crate) fn parse_bound(value: &Value) -> Option<BigInt> {
    match value {
        Value::String(s) => BigInt::from_str(s.trim()).ok(),
        Value::Number(n) => n.as_i64().map(BigInt::from).or_else(|| n.as_u64().map(BigInt::from)),
        _ => None,
    }
}

fn deserialize_bound<'de, D>(deserializer: D) -> Result<Option<BigInt>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => parse_bound(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("bound must be an integer, got {raw}"))),
    }
}

fn serialize_bound<S>(bound: &Option<BigInt>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bound {
        Some(n) => serializer.serialize_str(&n.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Primitive schema data types a format can refine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Integer => "integer",
            DataType::Boolean => "boolean",
            DataType::Array => "array",
            DataType::Object => "object",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(DataType::String),
            "number" => Ok(DataType::Number),
            "integer" => Ok(DataType::Integer),
            "boolean" => Ok(DataType::Boolean),
            "array" => Ok(DataType::Array),
            "object" => Ok(DataType::Object),
            other => Err(other.to_string()),
        }
    }
}

/// Schema dialects a registry keeps separate format tables for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    /// Swagger / OpenAPI 2.0
    #[serde(rename = "2.0")]
    V2_0,
    /// OpenAPI 3.0
    #[serde(rename = "3.0")]
    V3_0,
}

impl SchemaVersion {
    pub const ALL: [SchemaVersion; 2] = [SchemaVersion::V2_0, SchemaVersion::V3_0];
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V2_0 => f.write_str("v2.0"),
            SchemaVersion::V3_0 => f.write_str("v3.0"),
        }
    }
}
