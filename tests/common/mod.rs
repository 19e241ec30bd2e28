//! Common test utilities for bigint format testing.

use bigint_format::{BigIntConfig, FormatRegistry, RandomStrategy, Schema, SchemaVersion};
use num_bigint::BigInt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a decimal literal into a BigInt.
pub fn big(literal: &str) -> BigInt {
    literal.parse().expect("valid test literal")
}

/// Deterministic generator so failures reproduce.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `{type: "string", format: "bigint"}` merged with `extra`.
pub fn bigint_definition(extra: Value) -> Value {
    let mut definition = json!({"type": "string", "format": "bigint"});
    if let (Some(target), Some(source)) = (definition.as_object_mut(), extra.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    definition
}

/// Compile a bigint schema with the default handler configuration.
pub fn bigint_schema(version: SchemaVersion, extra: Value) -> Schema {
    init_logging();
    Schema::compile(&FormatRegistry::with_bigint(), version, &bigint_definition(extra))
        .expect("Failed to compile bigint schema")
}

/// Compile a bigint schema whose handler uses `strategy` for random values.
pub fn bigint_schema_with_strategy(
    version: SchemaVersion,
    strategy: RandomStrategy,
    extra: Value,
) -> Schema {
    init_logging();
    let registry =
        FormatRegistry::with_bigint_config(BigIntConfig::default().with_random_strategy(strategy));
    Schema::compile(&registry, version, &bigint_definition(extra))
        .expect("Failed to compile bigint schema")
}
