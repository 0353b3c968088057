// crates/geotags-core/src/input.rs

//! The geolocation record tags are generated from.

use crate::error::{GeoTagError, Result};
use crate::geohash;
use crate::tag::json_kind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recognized fields of an input record. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoInput {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub geohash: Option<String>,
    pub city_name: Option<String>,
    pub country_name: Option<String>,
    pub region_name: Option<String>,
    pub country_code: Option<String>,
    pub continent_name: Option<String>,
    pub continent_code: Option<String>,
    pub planet_name: Option<String>,
}

impl GeoInput {
    /// Read an input record from arbitrary JSON.
    ///
    /// Only the top-level shape is checked: `null` is a missing input, any
    /// other non-object is invalid. Recognized keys holding a value of the
    /// wrong type are skipped; unrecognized keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(GeoTagError::MissingInput),
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(GeoTagError::InvalidInput(json_kind(other).to_owned())),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        GeoInput {
            lat: number(map, "lat"),
            lon: number(map, "lon"),
            geohash: string(map, "geohash"),
            city_name: string(map, "cityName"),
            country_name: string(map, "countryName"),
            region_name: string(map, "regionName"),
            country_code: string(map, "countryCode"),
            continent_name: string(map, "continentName"),
            continent_code: string(map, "continentCode"),
            planet_name: string(map, "planetName"),
        }
    }

    /// The coordinate pair to tag, if any.
    ///
    /// An explicit `lat`/`lon` pair wins. Otherwise (neither given, or only
    /// one of them), when `decode_geohash` is set, the centre of the input
    /// geohash cell is used.
    pub fn coordinates(&self, decode_geohash: bool) -> Option<(f64, f64)> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some((lat, lon));
        }
        if !decode_geohash {
            return None;
        }
        let hash = self.geohash.as_deref().filter(|h| !h.is_empty())?;
        let decoded = geohash::decode(hash);
        match decoded {
            Some((lat, lon)) => tracing::debug!(hash, lat, lon, "decoded input geohash"),
            None => tracing::debug!(hash, "input geohash is not decodable"),
        }
        decoded
    }
}

fn number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::Null => None,
        other => {
            tracing::debug!(key, kind = json_kind(other), "ignoring non-numeric input field");
            None
        }
    }
}

fn string(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            tracing::debug!(key, kind = json_kind(other), "ignoring non-string input field");
            None
        }
    }
}
