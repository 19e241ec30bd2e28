//! Property-based tests for the bigint format.
//!
//! Uses proptest to generate integer literals of arbitrary length and bound
//! configurations, checking the round-trip and validation laws with
//! automatic shrinking.

use bigint_format::{BigIntFormat, DataTypeFormat, FormatValue, SchemaDescriptor};
use num_bigint::BigInt;
use num_traits::Signed;
use proptest::prelude::*;

/// Canonical decimal literals well beyond machine integer range.
fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "-?[1-9][0-9]{0,80}",
    ]
}

fn bigint_strategy() -> impl Strategy<Value = BigInt> {
    literal_strategy().prop_map(|s| s.parse::<BigInt>().expect("generated literal parses"))
}

prop_compose! {
    fn descriptor_strategy()
        (minimum in prop::option::of(bigint_strategy()),
         span in bigint_strategy(),
         with_maximum in any::<bool>(),
         exclusive_minimum in any::<bool>(),
         exclusive_maximum in any::<bool>())
        -> SchemaDescriptor {
        let maximum = match (&minimum, with_maximum) {
            (Some(min), true) => Some(min + span.abs()),
            (None, true) => Some(span),
            (_, false) => None,
        };
        SchemaDescriptor {
            maximum,
            minimum,
            exclusive_maximum,
            exclusive_minimum,
        }
    }
}

fn expected_clean(n: &BigInt, schema: &SchemaDescriptor) -> bool {
    let below_max = match &schema.maximum {
        None => true,
        Some(max) => n < max || (n == max && !schema.exclusive_maximum),
    };
    let above_min = match &schema.minimum {
        None => true,
        Some(min) => n > min || (n == min && !schema.exclusive_minimum),
    };
    below_max && above_min
}

proptest! {
    #[test]
    fn serialize_then_deserialize_is_identity(n in bigint_strategy()) {
        let format = BigIntFormat::new();
        let text = format.serialize(&FormatValue::BigInt(n.clone())).unwrap();
        prop_assert_eq!(format.deserialize(&text).unwrap(), FormatValue::BigInt(n));
    }

    #[test]
    fn canonical_literals_survive_unchanged(literal in literal_strategy()) {
        let format = BigIntFormat::new();
        let value = format.deserialize(&literal).unwrap();
        prop_assert_eq!(format.serialize(&value).unwrap(), literal);
    }

    #[test]
    fn fractional_and_exponent_literals_are_rejected(
        literal in literal_strategy(),
        suffix in prop::sample::select(vec![".0", ".5", "e3", "E-2", ".25e1"]),
    ) {
        let diagnostics = BigIntFormat::new()
            .deserialize(&format!("{literal}{suffix}"))
            .unwrap_err();
        prop_assert!(!diagnostics.is_empty());
        prop_assert!(diagnostics.to_string().contains("Cannot convert"));
    }

    #[test]
    fn validate_is_clean_exactly_within_bounds(
        n in bigint_strategy(),
        schema in descriptor_strategy(),
    ) {
        let diagnostics = BigIntFormat::new().validate(&FormatValue::BigInt(n.clone()), &schema);
        prop_assert_eq!(diagnostics.is_empty(), expected_clean(&n, &schema));
    }

    #[test]
    fn non_bigint_values_never_validate(n in any::<i64>(), schema in descriptor_strategy()) {
        let diagnostics = BigIntFormat::new().validate(&FormatValue::Integer(n), &schema);
        prop_assert!(diagnostics.messages()[0].starts_with("Expected a BigInt"));
    }
}
