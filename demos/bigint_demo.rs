//! # bigint Format Demo
//!
//! Walks one value through the whole pipeline: generate a random BigInt,
//! serialize it, deserialize it back, then show the diagnostics produced
//! for a wrongly typed value.
//!
//! ```bash
//! RUST_LOG=trace cargo run --example bigint_demo
//! ```

use bigint_format::{FormatRegistry, FormatValue, Schema, SchemaVersion};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let registry = FormatRegistry::with_bigint();
    let schema = Schema::compile(
        &registry,
        SchemaVersion::V3_0,
        &json!({"type": "string", "format": "bigint"}),
    )?;

    let big = schema.random();
    log::info!("Random value: {}", big);

    let string = schema.serialize(&big)?;
    log::info!("Serialized: {}", string);

    let n = schema.deserialize(&string)?;
    log::info!("Deserialized: {}", n);

    match schema.validate(&FormatValue::from(json!(1))) {
        Ok(()) => log::info!("Unexpectedly valid"),
        Err(diagnostics) => log::warn!("{}", diagnostics),
    }

    Ok(())
}
