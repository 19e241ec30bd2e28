//! Compiled schemas that dispatch to a registered format handler.
//!
//! A [`Schema`] is built once from a JSON schema object and then used to
//! process any number of values. It checks the keywords a numeric format
//! depends on (bounds and their ordering) and leaves everything else to the
//! handler.

use super::registry::FormatRegistry;
use super::types::{DataType, SchemaDescriptor, SchemaVersion, parse_bound};
use crate::error::{DiagnosticResult, Diagnostics, SchemaError, SchemaResult};
use crate::format::{DataTypeFormat, FormatValue};

use log::debug;
use num_bigint::BigInt;
use rand::RngCore;
use serde_json::{Map, Value};
use std::sync::Arc;

const DESERIALIZE_HEADER: &str = "Unable to deserialize value";
const SERIALIZE_HEADER: &str = "Unable to serialize value";
const VALIDATE_HEADER: &str = "Invalid value";

/// A schema object compiled against a [`FormatRegistry`].
#[derive(Debug, Clone)]
pub struct Schema {
    version: SchemaVersion,
    data_type: DataType,
    format: String,
    descriptor: SchemaDescriptor,
    handler: Arc<dyn DataTypeFormat>,
}

impl Schema {
    /// Compile a JSON schema object.
    ///
    /// ```rust
    /// use bigint_format::schema::{FormatRegistry, Schema, SchemaVersion};
    /// use serde_json::json;
    ///
    /// let registry = FormatRegistry::with_bigint();
    /// let schema = Schema::compile(
    ///     &registry,
    ///     SchemaVersion::V3_0,
    ///     &json!({"type": "string", "format": "bigint", "minimum": "1"}),
    /// )?;
    /// let value = schema.deserialize(&json!("1234")).unwrap();
    /// assert!(schema.validate(&value).is_ok());
    /// # Ok::<(), bigint_format::SchemaError>(())
    /// ```
    pub fn compile(
        registry: &FormatRegistry,
        version: SchemaVersion,
        definition: &Value,
    ) -> SchemaResult<Self> {
        let obj = definition.as_object().ok_or(SchemaError::NotAnObject)?;

        let data_type = match obj.get("type") {
            Some(Value::String(name)) => name
                .parse::<DataType>()
                .map_err(|data_type| SchemaError::UnknownType { data_type })?,
            Some(other) => {
                return Err(SchemaError::UnknownType {
                    data_type: other.to_string(),
                });
            }
            None => return Err(SchemaError::MissingType),
        };

        let format = obj
            .get("format")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let handler = registry
            .lookup(version, data_type, &format)
            .ok_or_else(|| SchemaError::UnknownFormat {
                data_type: data_type.to_string(),
                format: format.clone(),
                version: version.to_string(),
            })?;

        let descriptor = Self::read_descriptor(obj, &format, handler.is_numeric())?;
        debug!(
            "Compiled {} schema for type '{}' format '{}': {:?}",
            version, data_type, format, descriptor
        );

        Ok(Self {
            version,
            data_type,
            format,
            descriptor,
            handler,
        })
    }

    /// Compile a schema object given as JSON text.
    pub fn compile_str(
        registry: &FormatRegistry,
        version: SchemaVersion,
        definition: &str,
    ) -> SchemaResult<Self> {
        let definition: Value = serde_json::from_str(definition)?;
        Self::compile(registry, version, &definition)
    }

    /// Read and check the range keywords.
    fn read_descriptor(
        obj: &Map<String, Value>,
        format: &str,
        numeric: bool,
    ) -> SchemaResult<SchemaDescriptor> {
        const KEYWORDS: [&str; 4] = ["maximum", "minimum", "exclusiveMaximum", "exclusiveMinimum"];

        if !numeric {
            if let Some(keyword) = KEYWORDS.iter().find(|k| obj.contains_key(**k)) {
                return Err(SchemaError::numeric_keyword(*keyword, format));
            }
            return Ok(SchemaDescriptor::new());
        }

        let bound = |keyword: &str| -> SchemaResult<Option<BigInt>> {
            match obj.get(keyword) {
                None => Ok(None),
                Some(raw) => parse_bound(raw)
                    .map(Some)
                    .ok_or_else(|| SchemaError::invalid_bound(keyword, raw)),
            }
        };
        let flag = |keyword: &str| -> SchemaResult<bool> {
            match obj.get(keyword) {
                None => Ok(false),
                Some(Value::Bool(b)) => Ok(*b),
                Some(raw) => Err(SchemaError::invalid_flag(keyword, raw)),
            }
        };

        let descriptor = SchemaDescriptor {
            maximum: bound("maximum")?,
            minimum: bound("minimum")?,
            exclusive_maximum: flag("exclusiveMaximum")?,
            exclusive_minimum: flag("exclusiveMinimum")?,
        };

        if let (Some(minimum), Some(maximum)) = (&descriptor.minimum, &descriptor.maximum) {
            if minimum > maximum {
                return Err(SchemaError::InvertedBounds {
                    minimum: minimum.to_string(),
                    maximum: maximum.to_string(),
                });
            }
        }

        Ok(descriptor)
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn descriptor(&self) -> &SchemaDescriptor {
        &self.descriptor
    }

    /// Deserialize input data. Only strings reach the handler.
    pub fn deserialize(&self, value: &Value) -> DiagnosticResult<FormatValue> {
        match value {
            Value::String(s) => self
                .handler
                .deserialize(s)
                .map_err(|d| d.headed(DESERIALIZE_HEADER)),
            other => Err(Diagnostics::with_header(DESERIALIZE_HEADER).pushed(format!(
                "Expected a string. Received: {}",
                FormatValue::from(other).type_name()
            ))),
        }
    }

    /// Serialize a value into output data.
    pub fn serialize(&self, value: &FormatValue) -> DiagnosticResult<Value> {
        self.handler
            .serialize(value)
            .map(Value::String)
            .map_err(|d| d.headed(SERIALIZE_HEADER))
    }

    /// Validate a deserialized value.
    pub fn validate(&self, value: &FormatValue) -> DiagnosticResult<()> {
        self.handler
            .validate(value, &self.descriptor)
            .headed(VALIDATE_HEADER)
            .into_result()
    }

    /// Produce a random value using the thread-local generator.
    pub fn random(&self) -> FormatValue {
        self.random_with(&mut rand::thread_rng())
    }

    /// Produce a random value from the given generator.
    pub fn random_with(&self, rng: &mut dyn RngCore) -> FormatValue {
        self.handler.random(&self.descriptor, rng)
    }
}
