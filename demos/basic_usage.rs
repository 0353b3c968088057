//! Basic usage example for geotags-rs
//!
//! This example demonstrates how to:
//! - Generate tags from a JSON location record with default options
//! - Switch on coordinates, subdivisions and retired codes
//! - Sort the output and print it as JSON
//!
//! Run with `RUST_LOG=geotags_core=debug` to see lookup decisions.

use geotags_rs::{generate, PartialOptions, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("=== geotags-rs Basic Usage Example ===\n");

    let record = json!({
        "lat": 47.5636,
        "lon": 19.0947,
        "cityName": "Budapest",
        "regionName": "Budapest",
        "countryCode": "HU"
    });

    // Example 1: defaults (geohash ladder, country codes, city)
    println!("--- Example 1: Default options ---");
    let tags = generate(&record, &PartialOptions::default())?;
    for tag in &tags {
        println!("{tag}");
    }
    println!("{} tags\n", tags.len());

    // Example 2: everything on, labels first
    println!("--- Example 2: GPS, ISO 3166-2/-3, planet, sorted ---");
    let opts = PartialOptions {
        gps: Some(true),
        iso31662: Some(true),
        iso31663: Some(true),
        planet: Some(true),
        sort: Some(true),
        ..Default::default()
    };
    let tags = generate(&record, &opts)?;
    println!("{}\n", serde_json::to_string(&tags)?);

    // Example 3: a retired code
    println!("--- Example 3: Retired ISO 3166-3 code ---");
    let opts: PartialOptions = serde_json::from_value(json!({
        "iso31663": true,
        "isoAsNamespace": true,
        "geohash": false
    }))?;
    for tag in generate(&json!({"countryCode": "AI"}), &opts)? {
        println!("{tag}");
    }
    println!();

    // Example 4: bad input
    println!("--- Example 4: Input must be an object ---");
    match generate(&json!("Budapest"), &PartialOptions::default()) {
        Ok(_) => println!("unexpectedly accepted a string"),
        Err(e) => println!("✓ rejected: {e}"),
    }

    Ok(())
}
