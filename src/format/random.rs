//! Random sampling of arbitrary-precision integers.
//!
//! Ranges wider than a double can represent exactly are handled in two ways:
//!
//! - [`segmented`] splits the range into at most [`SAFE_INTEGER_SPAN`]
//!   segments and draws with floating-point arithmetic. It matches the output
//!   of other bigint format implementations, skew included (see the function
//!   docs).
//! - [`uniform`] draws uniformly over the whole range using
//!   [`RandBigInt::gen_bigint_range`].

use num_bigint::{BigInt, RandBigInt};
use num_traits::ToPrimitive;
use rand::{Rng, RngCore};

/// Largest integer magnitude a double represents exactly (`2^53 - 1`).
pub const SAFE_INTEGER_SPAN: u64 = (1 << 53) - 1;

/// Resolved sampling interval, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRange {
    pub minimum: BigInt,
    pub maximum: BigInt,
}

impl SampleRange {
    /// Build a two-sided range from optional bounds.
    ///
    /// A missing side is synthesized [`SAFE_INTEGER_SPAN`] away from the
    /// present one. Returns `None` when both sides are missing.
    pub fn from_bounds(minimum: Option<&BigInt>, maximum: Option<&BigInt>) -> Option<Self> {
        let span = BigInt::from(SAFE_INTEGER_SPAN);
        let (minimum, maximum) = match (minimum, maximum) {
            (None, None) => return None,
            (None, Some(max)) => (max - &span, max.clone()),
            (Some(min), None) => (min.clone(), min + &span),
            (Some(min), Some(max)) => (min.clone(), max.clone()),
        };
        Some(Self { minimum, maximum })
    }

    /// `maximum - minimum`
    pub fn width(&self) -> BigInt {
        &self.maximum - &self.minimum
    }

    pub fn is_empty(&self) -> bool {
        self.maximum < self.minimum
    }
}

/// Large non-negative integer for schemas without bounds.
///
/// Two integers are drawn from `[0, SAFE_INTEGER_SPAN)` and their decimal
/// forms concatenated. The result routinely exceeds any machine integer but
/// follows no particular distribution.
pub fn unbounded(rng: &mut dyn RngCore) -> BigInt {
    let high = rng.gen_range(0..SAFE_INTEGER_SPAN);
    let low = rng.gen_range(0..SAFE_INTEGER_SPAN);
    let low_digits = decimal_digits(low);

    BigInt::from(high) * BigInt::from(10u32).pow(low_digits) + BigInt::from(low)
}

/// Segmented draw over `range`, returning `minimum + segment_index * offset`.
///
/// `segment_index` is `ceil(u * segment_count)` and `offset` is
/// `round(u' * segment_size)` for independent `u, u'` in `[0, 1)`. The
/// product is bounded by `segment_count * segment_size <= width`, so results
/// stay inside the range, but they cluster near `minimum` and are far from
/// uniform. The range must not be empty.
pub fn segmented(range: &SampleRange, rng: &mut dyn RngCore) -> BigInt {
    let (segment_count, segment_size) = segments(&range.width());

    let segment_index = (rng.gen_range(0.0..1.0) * segment_count as f64).ceil() as u64;
    let offset = (rng.gen_range(0.0..1.0) * segment_size as f64).round() as u64;

    &range.minimum + BigInt::from(segment_index) * BigInt::from(offset)
}

/// Uniform draw over `range`, both ends inclusive. The range must not be empty.
pub fn uniform(range: &SampleRange, rng: &mut dyn RngCore) -> BigInt {
    let upper = &range.maximum + 1u32;
    rng.gen_bigint_range(&range.minimum, &upper)
}

/// Split `width` into `(segment_count, segment_size)`, each capped at
/// [`SAFE_INTEGER_SPAN`].
pub(crate) fn segments(width: &BigInt) -> (u64, u64) {
    let span = BigInt::from(SAFE_INTEGER_SPAN);
    if width <= &span {
        return (1, width.to_u64().unwrap_or(0));
    }

    let count = (BigInt::from(1u32) + width / &span).min(span.clone());
    let size = (width / &count).min(span);

    (
        count.to_u64().unwrap_or(SAFE_INTEGER_SPAN),
        size.to_u64().unwrap_or(SAFE_INTEGER_SPAN),
    )
}

fn decimal_digits(mut n: u64) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
