//! Format handler tests.
//!
//! Each module exercises one of the four handler operations directly on
//! `BigIntFormat`, except where the compiled-schema path is the point.

pub mod deserialize;
pub mod properties;
pub mod serialize;
