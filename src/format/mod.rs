//! Data type formats and the handler interface they implement.
//!
//! A format refines a primitive schema type with a custom representation,
//! e.g. `"bigint"` under `"string"`. Every format supplies the same four
//! operations, which the host calls one at a time while processing a value.
//!
//! # Key Types
//!
//! - [`DataTypeFormat`] - The fixed handler interface
//! - [`FormatValue`] - The dynamically typed value handed to handlers
//! - [`BigIntFormat`] - Arbitrary-precision integer handler
//!
//! # Examples
//!
//! ```rust
//! use bigint_format::format::{BigIntFormat, DataTypeFormat};
//! use bigint_format::schema::SchemaDescriptor;
//!
//! let format = BigIntFormat::new();
//! let value = format.deserialize("1234").expect("valid literal");
//! assert_eq!(format.serialize(&value).unwrap(), "1234");
//! assert!(format.validate(&value, &SchemaDescriptor::new()).is_empty());
//! ```

pub mod bigint;
pub mod random;
pub mod value;

pub use bigint::{BigIntConfig, BigIntFormat, RandomStrategy};
pub use random::SAFE_INTEGER_SPAN;
pub use value::FormatValue;

use crate::error::Diagnostics;
use crate::schema::types::SchemaDescriptor;
use rand::RngCore;
use std::fmt::Debug;

/// Handler interface for a data type format.
///
/// Implementations are stateless from the caller's point of view: every
/// call receives everything it needs and reports failures as
/// [`Diagnostics`] rather than panicking.
pub trait DataTypeFormat: Debug + Send + Sync {
    /// Convert the textual form into the format's runtime value.
    fn deserialize(&self, value: &str) -> Result<FormatValue, Diagnostics>;

    /// Convert a runtime value back into its textual form.
    fn serialize(&self, value: &FormatValue) -> Result<String, Diagnostics>;

    /// Check a deserialized value against the schema's constraints.
    ///
    /// Returns every violation found; an empty list means the value is valid.
    fn validate(&self, value: &FormatValue, schema: &SchemaDescriptor) -> Diagnostics;

    /// Produce a pseudo-random value satisfying the schema's bounds.
    fn random(&self, schema: &SchemaDescriptor, rng: &mut dyn RngCore) -> FormatValue;

    /// Whether range keywords (`maximum`, `minimum`, `exclusiveMaximum`,
    /// `exclusiveMinimum`) apply to this format.
    fn is_numeric(&self) -> bool {
        false
    }
}
