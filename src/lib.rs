//! Arbitrary-precision integer format for schema validation pipelines.
//!
//! Adds the `"bigint"` format to the primitive type `"string"`. Values are
//! exchanged as base-10 strings and handled as [`num_bigint::BigInt`] once
//! deserialized, so integers of any size survive without precision loss.
//!
//! # Core Components
//!
//! - [`BigIntFormat`] - The format handler (deserialize, serialize, validate, random)
//! - [`FormatRegistry`] - Handlers keyed by schema version, type and format
//! - [`Schema`] - A compiled schema object that dispatches to its handler
//! - [`Diagnostics`] - Human-readable messages returned instead of hard errors
//!
//! # Quick Start
//!
//! ```rust
//! use bigint_format::{FormatRegistry, Schema, SchemaVersion};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = FormatRegistry::with_bigint();
//! let schema = Schema::compile(
//!     &registry,
//!     SchemaVersion::V3_0,
//!     &json!({"type": "string", "format": "bigint"}),
//! )?;
//!
//! let n = schema.deserialize(&json!("12345678901234567890123456789012345678901234567890"))?;
//! assert_eq!(
//!     schema.serialize(&n)?,
//!     json!("12345678901234567890123456789012345678901234567890")
//! );
//! assert!(schema.deserialize(&json!("1234.5")).is_err());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{DiagnosticResult, Diagnostics, SchemaError, SchemaResult};
pub use format::{
    BigIntConfig, BigIntFormat, DataTypeFormat, FormatValue, RandomStrategy, SAFE_INTEGER_SPAN,
};
pub use schema::{DataType, FormatRegistry, Schema, SchemaDescriptor, SchemaVersion};
