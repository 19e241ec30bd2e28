//! Arbitrary-precision integer format.
//!
//! Registered under the primitive type `"string"` with the format name
//! `"bigint"`. Values travel as base-10 strings and are represented as
//! [`BigInt`] once deserialized. The format is numeric, so `maximum`,
//! `minimum`, `exclusiveMaximum` and `exclusiveMinimum` apply to it.

use super::random::{self, SampleRange};
use super::{DataTypeFormat, FormatValue};
use crate::error::Diagnostics;
use crate::schema::types::SchemaDescriptor;
use log::{trace, warn};
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Format name the handler registers under.
pub const FORMAT_NAME: &str = "bigint";

/// How random values are drawn for bounded schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RandomStrategy {
    /// Uniform over the bounded range, honoring exclusive bounds.
    #[default]
    Uniform,
    /// Segment-index times offset draw. Matches the output of other bigint
    /// format implementations; ignores exclusive bounds and is not uniform.
    Segmented,
}

/// Configuration for [`BigIntFormat`].
///
/// ```rust
/// use bigint_format::format::{BigIntConfig, RandomStrategy};
///
/// let config: BigIntConfig = serde_json::from_str(r#"{"randomStrategy": "segmented"}"#).unwrap();
/// assert_eq!(config.random_strategy, RandomStrategy::Segmented);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BigIntConfig {
    pub random_strategy: RandomStrategy,
}

impl BigIntConfig {
    pub fn with_random_strategy(mut self, strategy: RandomStrategy) -> Self {
        self.random_strategy = strategy;
        self
    }
}

/// Handler for the `"bigint"` format.
#[derive(Debug, Clone, Default)]
pub struct BigIntFormat {
    config: BigIntConfig,
}

impl BigIntFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BigIntConfig) -> Self {
        Self { config }
    }

    /// Parse an optionally signed base-10 literal.
    ///
    /// Surrounding whitespace is ignored. Fractions, exponents, other radixes
    /// and digit separators are rejected.
    pub fn parse_literal(value: &str) -> Result<BigInt, String> {
        let literal = value.trim();
        let parsed = BigInt::from_str(literal).map_err(|err| cannot_convert(value, err))?;

        let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);
        match unsigned.chars().find(|c| !c.is_ascii_digit()) {
            Some(c) => Err(cannot_convert(value, format!("unexpected character '{c}'"))),
            None => Ok(parsed),
        }
    }

    /// Narrow `range` by one on each side whose schema bound is exclusive.
    fn exclusive_range(range: SampleRange, schema: &SchemaDescriptor) -> SampleRange {
        let SampleRange {
            mut minimum,
            mut maximum,
        } = range;
        if schema.exclusive_minimum && schema.has_minimum() {
            minimum += 1u32;
        }
        if schema.exclusive_maximum && schema.has_maximum() {
            maximum -= 1u32;
        }
        SampleRange { minimum, maximum }
    }
}

fn cannot_convert(value: &str, reason: impl fmt::Display) -> String {
    format!("Cannot convert {value} to a BigInt: {reason}")
}

fn expected_bigint(value: &FormatValue) -> String {
    format!("Expected a BigInt. Received: {}", value.type_name())
}

/// Order `value` against an integer bound.
///
/// Integers compare exactly, floats compare by their exact value and strings
/// compare when they hold a base-10 literal. `None` means the value has no
/// order (NaN, non-numeric strings, other types) and the check is skipped.
fn compare_to_bound(value: &FormatValue, bound: &BigInt) -> Option<Ordering> {
    match value {
        FormatValue::Number(x) => compare_float(*x, bound),
        FormatValue::String(s) => BigIntFormat::parse_literal(s).ok().map(|n| n.cmp(bound)),
        other => other.to_integer().map(|n| n.cmp(bound)),
    }
}

fn compare_float(x: f64, bound: &BigInt) -> Option<Ordering> {
    if x.is_nan() {
        return None;
    }
    if x.is_infinite() {
        return Some(if x > 0.0 { Ordering::Greater } else { Ordering::Less });
    }
    let floor = BigInt::from_f64(x.floor())?;
    if x.fract() == 0.0 {
        return Some(floor.cmp(bound));
    }
    // Strictly between floor and floor + 1, so never equal to an integer.
    Some(if &floor >= bound {
        Ordering::Greater
    } else {
        Ordering::Less
    })
}

impl DataTypeFormat for BigIntFormat {
    fn deserialize(&self, value: &str) -> Result<FormatValue, Diagnostics> {
        trace!("Deserializing bigint literal {:?}", value);
        Self::parse_literal(value)
            .map(FormatValue::BigInt)
            .map_err(Diagnostics::single)
    }

    fn serialize(&self, value: &FormatValue) -> Result<String, Diagnostics> {
        match value {
            FormatValue::BigInt(n) => Ok(n.to_string()),
            FormatValue::Integer(n) => Ok(n.to_string()),
            other => Err(Diagnostics::single(expected_bigint(other))),
        }
    }

    fn validate(&self, value: &FormatValue, schema: &SchemaDescriptor) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        if !value.is_bigint() {
            diagnostics.push(expected_bigint(value));
        }

        if let Some(maximum) = &schema.maximum {
            let violated = match compare_to_bound(value, maximum) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => schema.exclusive_maximum,
                _ => false,
            };
            if violated {
                let at_or = if schema.exclusive_maximum { "" } else { "at or " };
                diagnostics.push(format!(
                    "Value must be {at_or}below the maximum of {maximum}. Received: {value}"
                ));
            }
        }

        if let Some(minimum) = &schema.minimum {
            let violated = match compare_to_bound(value, minimum) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => schema.exclusive_minimum,
                _ => false,
            };
            if violated {
                let at_or = if schema.exclusive_minimum { "" } else { "at or " };
                diagnostics.push(format!(
                    "Value must be {at_or}above the minimum of {minimum}. Received: {value}"
                ));
            }
        }

        trace!("Validated {} with {} message(s)", value, diagnostics.len());
        diagnostics
    }

    fn random(&self, schema: &SchemaDescriptor, rng: &mut dyn RngCore) -> FormatValue {
        let Some(range) =
            SampleRange::from_bounds(schema.minimum.as_ref(), schema.maximum.as_ref())
        else {
            return FormatValue::BigInt(random::unbounded(rng));
        };

        let range = match self.config.random_strategy {
            RandomStrategy::Segmented => range,
            RandomStrategy::Uniform => Self::exclusive_range(range, schema),
        };

        if range.is_empty() {
            warn!(
                "No integer lies within the exclusive-adjusted range [{}, {}]; \
                 returning its adjusted lower bound {}, which the schema excludes",
                range.minimum, range.maximum, range.minimum
            );
            return FormatValue::BigInt(range.minimum);
        }

        let value = match self.config.random_strategy {
            RandomStrategy::Segmented => random::segmented(&range, rng),
            RandomStrategy::Uniform => random::uniform(&range, rng),
        };
        trace!("Generated {} within [{}, {}]", value, range.minimum, range.maximum);
        FormatValue::BigInt(value)
    }

    fn is_numeric(&self) -> bool {
        true
    }
}
