//! Deserialization tests.

use crate::common::big;
use bigint_format::{BigIntFormat, DataTypeFormat, FormatValue};

#[test]
fn test_deserialize_small_integer() {
    let value = BigIntFormat::new().deserialize("1234").expect("valid literal");
    assert_eq!(value, FormatValue::BigInt(big("1234")));
}

#[test]
fn test_deserialize_big_integer_without_precision_loss() {
    let literal = "12345678901234567890123456789012345678901234567890";
    let value = BigIntFormat::new().deserialize(literal).expect("valid literal");

    let n = value.as_bigint().expect("deserialized to a BigInt");
    assert_eq!(n, &big(literal));
    assert_eq!(n.to_string(), literal);
}

#[test]
fn test_deserialize_negative_big_integer() {
    let literal = "-98765432109876543210987654321";
    let value = BigIntFormat::new().deserialize(literal).unwrap();
    assert_eq!(value.into_bigint(), Some(big(literal)));
}

#[test]
fn test_deserialize_decimal_reports_cannot_convert() {
    let diagnostics = BigIntFormat::new()
        .deserialize("1234.5")
        .expect_err("decimals are not integers");

    assert!(!diagnostics.is_empty());
    assert!(diagnostics.to_string().contains("Cannot convert"));
    assert!(diagnostics.to_string().contains("1234.5"));
}

#[test]
fn test_deserialize_rejects_exponent_notation() {
    for input in ["1e10", "1E10", "2.5e3"] {
        let diagnostics = BigIntFormat::new().deserialize(input).unwrap_err();
        assert!(
            diagnostics.messages()[0].starts_with("Cannot convert"),
            "unexpected message for {input}: {diagnostics}"
        );
    }
}

#[test]
fn test_deserialize_rejects_garbage() {
    let format = BigIntFormat::new();
    for input in ["", "   ", "abc", "12a", "1 2", "1_000", "0b101", "+"] {
        assert!(format.deserialize(input).is_err(), "accepted {input:?}");
    }
}

#[test]
fn test_deserialize_accepts_leading_zeros() {
    let value = BigIntFormat::new().deserialize("-000123").unwrap();
    assert_eq!(value, FormatValue::BigInt(big("-123")));
}
