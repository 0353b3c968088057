//! Using your own ISO 3166 tables.
//!
//! The bundled subdivision table only covers a handful of countries. Point
//! this example at a directory holding `iso3166-1.json`, `iso3166-2.json`
//! and `iso3166-3.json` (or their `.json.gz` forms) to tag against complete
//! tables:
//!
//! ```text
//! cargo run --example custom_reference_data -- /path/to/tables
//! ```
//!
//! Without an argument the crate's own `data/` directory is used.

use geotags_rs::{GeoInput, GeoTagger, Options, ReferenceData, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(ReferenceData::default_data_dir);

    let data = ReferenceData::load_from_dir(&dir)?;
    let stats = data.stats();
    println!(
        "Loaded {} countries, {} subdivisions, {} change records from {}\n",
        stats.countries,
        stats.subdivisions,
        stats.changes,
        dir.display()
    );

    let opts = Options {
        iso31662: true,
        iso31663: true,
        sort: true,
        ..Options::default()
    };
    let tagger = GeoTagger::new(&data, opts);

    let inputs = [
        GeoInput {
            country_code: Some("US".into()),
            region_name: Some("California".into()),
            city_name: Some("San Francisco".into()),
            ..Default::default()
        },
        GeoInput {
            country_code: Some("DE".into()),
            region_name: Some("Bayern".into()),
            ..Default::default()
        },
        GeoInput {
            geohash: Some("u4pruydqqvj".into()),
            ..Default::default()
        },
    ];

    for input in &inputs {
        let tags = tagger.tag(input);
        println!("{}", serde_json::to_string(&tags)?);
    }

    Ok(())
}
