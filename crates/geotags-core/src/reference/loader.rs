// crates/geotags-core/src/reference/loader.rs

//! Loading of the reference tables: the bundled copy compiled into the
//! crate, JSON strings, or a directory on disk.

use super::{Country, CountryChange, ReferenceData, Subdivision};
use crate::error::{GeoTagError, Result};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

const BUNDLED_ISO31661: &str = include_str!("../../data/iso3166-1.json");
const BUNDLED_ISO31662: &str = include_str!("../../data/iso3166-2.json");
const BUNDLED_ISO31663: &str = include_str!("../../data/iso3166-3.json");

pub const ISO31661_FILENAME: &str = "iso3166-1.json";
pub const ISO31662_FILENAME: &str = "iso3166-2.json";
pub const ISO31663_FILENAME: &str = "iso3166-3.json";

// Single in-process cache so the bundled tables are parsed once.
static BUNDLED: OnceCell<ReferenceData> = OnceCell::new();

impl ReferenceData {
    /// The tables shipped with the crate, parsed on first use.
    pub fn bundled() -> Result<&'static ReferenceData> {
        BUNDLED.get_or_try_init(|| {
            let data =
                Self::from_json_strs(BUNDLED_ISO31661, BUNDLED_ISO31662, BUNDLED_ISO31663)?;
            tracing::debug!(stats = ?data.stats(), "parsed bundled reference data");
            Ok(data)
        })
    }

    /// Directory holding the bundled JSON sources.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Build tables from three JSON arrays (parts 1, 2 and 3).
    pub fn from_json_strs(iso31661: &str, iso31662: &str, iso31663: &str) -> Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(iso31661)?;
        let subdivisions: Vec<Subdivision> = serde_json::from_str(iso31662)?;
        let changes: Vec<CountryChange> = serde_json::from_str(iso31663)?;
        Ok(Self::new(countries, subdivisions, changes))
    }

    /// Load `iso3166-1.json`, `iso3166-2.json` and `iso3166-3.json` from
    /// `dir`. With the `compact` feature, a `.json.gz` sibling is used when
    /// the plain file is missing.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let countries: Vec<Country> = read_table(dir, ISO31661_FILENAME)?;
        let subdivisions: Vec<Subdivision> = read_table(dir, ISO31662_FILENAME)?;
        let changes: Vec<CountryChange> = read_table(dir, ISO31663_FILENAME)?;
        let data = Self::new(countries, subdivisions, changes);
        tracing::debug!(dir = %dir.display(), stats = ?data.stats(), "loaded reference data");
        Ok(data)
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<Vec<T>> {
    let path = locate(dir, filename)?;
    parse_table(&path)
}

fn parse_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let reader = open_stream(path)?;
    serde_json::from_reader(reader).map_err(|e| {
        // read failures (including a broken gzip stream) are I/O, not syntax
        if e.is_io() {
            GeoTagError::Io(e.into())
        } else {
            GeoTagError::Json(e)
        }
    })
}

fn locate(dir: &Path, filename: &str) -> Result<PathBuf> {
    let plain = dir.join(filename);
    if plain.is_file() {
        return Ok(plain);
    }

    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{filename}.gz"));
        if gz.is_file() {
            return Ok(gz);
        }
    }

    Err(GeoTagError::NotFound(format!(
        "{} not found in {}",
        filename,
        dir.display()
    )))
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            GeoTagError::NotFound(format!("Reference table not found at {}: {}", path.display(), e))
        }
        _ => GeoTagError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if path.extension().is_some_and(|ext| ext == "gz") {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}
