//! End-to-end tests through compiled schemas.
//!
//! These mirror how a host drives the handler: compile a schema object, then
//! deserialize input, validate it, serialize output and generate samples.

use crate::common::{big, bigint_schema, bigint_schema_with_strategy, seeded_rng};
use bigint_format::{FormatValue, RandomStrategy, SchemaVersion};
use serde_json::json;

#[test]
fn test_v2_deserialize_small_and_big_integers() {
    let schema = bigint_schema(SchemaVersion::V2_0, json!({}));

    let n = schema.deserialize(&json!("1234")).unwrap();
    assert_eq!(n, FormatValue::BigInt(big("1234")));

    let literal = "12345678901234567890123456789012345678901234567890";
    let n = schema.deserialize(&json!(literal)).unwrap();
    assert_eq!(n, FormatValue::BigInt(big(literal)));
}

#[test]
fn test_v2_cannot_deserialize_a_decimal() {
    let schema = bigint_schema(SchemaVersion::V2_0, json!({}));
    let error = schema.deserialize(&json!("1234.5")).unwrap_err();
    assert!(error.to_string().contains("Cannot convert"));
}

#[test]
fn test_v3_serialize() {
    let schema = bigint_schema(SchemaVersion::V3_0, json!({}));
    assert_eq!(schema.serialize(&FormatValue::BigInt(big("1"))).unwrap(), json!("1"));

    let literal = "12345678901234567890123456789012345678901234567890";
    assert_eq!(
        schema.serialize(&FormatValue::BigInt(big(literal))).unwrap(),
        json!(literal)
    );
}

#[test]
fn test_v3_requires_type_to_be_a_bigint() {
    let schema = bigint_schema(SchemaVersion::V3_0, json!({}));

    assert!(schema.validate(&FormatValue::BigInt(big("1"))).is_ok());
    let error = schema.validate(&FormatValue::from(json!(1))).unwrap_err();
    assert!(error.to_string().contains("Expected a BigInt"));
}

#[test]
fn test_v2_validate_minimum_keywords() {
    let schema = bigint_schema(SchemaVersion::V2_0, json!({"minimum": "1"}));
    assert!(schema.validate(&FormatValue::BigInt(big("1"))).is_ok());
    let error = schema.validate(&FormatValue::BigInt(big("0"))).unwrap_err();
    assert!(error.to_string().contains("Value must be at or above the minimum"));

    let schema = bigint_schema(
        SchemaVersion::V2_0,
        json!({"minimum": "0", "exclusiveMinimum": true}),
    );
    assert!(schema.validate(&FormatValue::BigInt(big("1"))).is_ok());
    let error = schema.validate(&FormatValue::BigInt(big("0"))).unwrap_err();
    assert!(error.to_string().contains("Value must be above the minimum"));
    assert!(!error.to_string().contains("at or"));
}

#[test]
fn test_random_within_bounds_from_string_keywords() {
    for strategy in [RandomStrategy::Uniform, RandomStrategy::Segmented] {
        let schema = bigint_schema_with_strategy(
            SchemaVersion::V2_0,
            strategy,
            json!({"minimum": "-10000000000000000", "maximum": "10000000000000000"}),
        );
        let mut rng = seeded_rng(2024);
        for _ in 0..100 {
            let value = schema.random_with(&mut rng);
            assert!(schema.validate(&value).is_ok(), "{strategy:?} produced {value}");
        }
    }
}

#[test]
fn test_full_round_trip() {
    let schema = bigint_schema(SchemaVersion::V3_0, json!({}));

    let value = schema.random();
    assert!(value.is_bigint());

    let text = schema.serialize(&value).unwrap();
    assert!(text.is_string());

    let back = schema.deserialize(&text).unwrap();
    assert_eq!(back, value);
    assert!(schema.validate(&back).is_ok());
}
