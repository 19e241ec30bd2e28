//! Schema descriptors, the format registry and compiled schemas.
//!
//! # Key Types
//!
//! - [`SchemaDescriptor`] - Range constraints handed to format handlers
//! - [`FormatRegistry`] - Handlers keyed by schema version, type and format
//! - [`Schema`] - A compiled schema object that dispatches to its handler
//!
//! # Examples
//!
//! ```rust
//! use bigint_format::schema::{FormatRegistry, Schema, SchemaVersion};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = FormatRegistry::with_bigint();
//! let schema = Schema::compile(
//!     &registry,
//!     SchemaVersion::V2_0,
//!     &json!({"type": "string", "format": "bigint"}),
//! )?;
//! let value = schema.random();
//! let text = schema.serialize(&value)?;
//! assert_eq!(schema.deserialize(&text)?, value);
//! # Ok(())
//! # }
//! ```

pub mod compiled;
pub mod registry;
pub mod types;


// Re-export the main types for convenience
pub use compiled::Schema;
pub use registry::FormatRegistry;
pub use types::{DataType, SchemaDescriptor, SchemaVersion};
