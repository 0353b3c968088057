// crates/geotags-core/src/lib.rs

//! Geographic tag generation.
//!
//! Feed a loosely structured location record in, get a flat list of
//! `["G", namespace]` / `["g", value, namespace, qualifier?]` tags out:
//!
//! ```rust
//! use geotags_core::{generate, PartialOptions};
//! use serde_json::json;
//!
//! let tags = generate(&json!({"countryCode": "HU"}), &PartialOptions::default()).unwrap();
//! let wire = serde_json::to_value(&tags).unwrap();
//! assert_eq!(wire[0], json!(["G", "countryCode"]));
//! assert_eq!(wire[1], json!(["g", "HU", "countryCode", "alpha-2"]));
//! ```

pub mod continent;
pub mod error;
pub mod generator;
pub mod geohash;
pub mod input;
pub mod namespace;
pub mod options;
pub mod pipeline;
pub mod reference;
pub mod resolution;
pub mod tag;

// Re-exports
pub use crate::error::{GeoTagError, Result};
pub use crate::generator::GeoTagger;
pub use crate::input::GeoInput;
pub use crate::options::{Options, PartialOptions, DEFAULT_MAX_RESOLUTION};
pub use crate::reference::{DataStats, ReferenceData};
pub use crate::tag::Tag;

/// Generate tags for a JSON input record against the bundled reference
/// tables.
///
/// Fails when `input` is `null` or not an object. Everything else, including
/// unknown codes and mistyped fields, simply yields fewer tags.
pub fn generate(input: &serde_json::Value, opts: &PartialOptions) -> Result<Vec<Tag>> {
    let input = GeoInput::from_value(input)?;
    let data = ReferenceData::bundled()?;
    Ok(GeoTagger::new(data, Options::resolve(opts)).tag(&input))
}
