//! Serialization tests.

use crate::common::big;
use bigint_format::{BigIntFormat, DataTypeFormat, FormatValue};

#[test]
fn test_serialize_small_number() {
    let text = BigIntFormat::new()
        .serialize(&FormatValue::BigInt(big("1")))
        .unwrap();
    assert_eq!(text, "1");
}

#[test]
fn test_serialize_large_number() {
    let literal = "12345678901234567890123456789012345678901234567890";
    let text = BigIntFormat::new()
        .serialize(&FormatValue::BigInt(big(literal)))
        .unwrap();
    assert_eq!(text, literal);
}

#[test]
fn test_serialize_is_canonical() {
    let format = BigIntFormat::new();
    assert_eq!(format.serialize(&FormatValue::BigInt(big("-0"))).unwrap(), "0");
    assert_eq!(format.serialize(&FormatValue::BigInt(big("+0042"))).unwrap(), "42");
    assert_eq!(format.serialize(&FormatValue::BigInt(big("-7"))).unwrap(), "-7");
}

#[test]
fn test_serialize_rejects_floats() {
    let diagnostics = BigIntFormat::new()
        .serialize(&FormatValue::Number(1.5))
        .unwrap_err();
    assert_eq!(diagnostics.messages(), ["Expected a BigInt. Received: number"]);
}
