//! Format registry for looking up data type format handlers.
//!
//! The registry maps `(SchemaVersion, DataType, format name)` to a shared
//! handler. It is an ordinary value: callers build one at startup (usually
//! with [`FormatRegistry::with_bigint`]) and pass it to
//! [`Schema::compile`](super::Schema::compile).

use super::types::{DataType, SchemaVersion};
use crate::format::bigint::FORMAT_NAME as BIGINT_FORMAT;
use crate::format::{BigIntConfig, BigIntFormat, DataTypeFormat};

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

type FormatKey = (SchemaVersion, DataType, String);

/// Registry of data type format handlers.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: HashMap<FormatKey, Arc<dyn DataTypeFormat>>,
}

impl FormatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the bigint format bound under
    /// `("string", "bigint")` for every schema version.
    pub fn with_bigint() -> Self {
        Self::with_bigint_config(BigIntConfig::default())
    }

    /// Like [`with_bigint`](Self::with_bigint), with an explicit handler
    /// configuration.
    pub fn with_bigint_config(config: BigIntConfig) -> Self {
        let mut registry = Self::new();
        let handler: Arc<dyn DataTypeFormat> = Arc::new(BigIntFormat::with_config(config));
        for version in SchemaVersion::ALL {
            registry.register_shared(version, DataType::String, BIGINT_FORMAT, handler.clone());
        }
        registry
    }

    /// Register a handler, replacing any previous one under the same key.
    pub fn register<F>(
        &mut self,
        version: SchemaVersion,
        data_type: DataType,
        format: impl Into<String>,
        handler: F,
    ) -> Option<Arc<dyn DataTypeFormat>>
    where
        F: DataTypeFormat + 'static,
    {
        self.register_shared(version, data_type, format, Arc::new(handler))
    }

    /// Register an already shared handler.
    pub fn register_shared(
        &mut self,
        version: SchemaVersion,
        data_type: DataType,
        format: impl Into<String>,
        handler: Arc<dyn DataTypeFormat>,
    ) -> Option<Arc<dyn DataTypeFormat>> {
        let format = format.into();
        debug!("Registering format '{}' for type '{}' in {}", format, data_type, version);
        self.formats.insert((version, data_type, format), handler)
    }

    /// Look up the handler for a type/format pair.
    pub fn lookup(
        &self,
        version: SchemaVersion,
        data_type: DataType,
        format: &str,
    ) -> Option<Arc<dyn DataTypeFormat>> {
        self.formats
            .get(&(version, data_type, format.to_string()))
            .cloned()
    }

    pub fn contains(&self, version: SchemaVersion, data_type: DataType, format: &str) -> bool {
        self.lookup(version, data_type, format).is_some()
    }

    /// Format names registered for a type in a schema version, sorted.
    pub fn formats_for(&self, version: SchemaVersion, data_type: DataType) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .formats
            .keys()
            .filter(|(v, t, _)| *v == version && *t == data_type)
            .map(|(_, _, name)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
