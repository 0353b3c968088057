// crates/geotags-core/src/geohash.rs

//! Geohash codec.
//!
//! Standard base-32 geohash: bits alternate between longitude and latitude,
//! starting with longitude, five bits per character.

/// Precision used for generated geohashes.
pub const DEFAULT_PRECISION: usize = 9;

const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

fn decode_char(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    BASE32.iter().position(|&b| b as char == lower).map(|i| i as u8)
}

/// Encode a coordinate pair into a geohash of `precision` characters.
///
/// ```rust
/// use geotags_core::geohash::encode;
///
/// assert_eq!(encode(47.5636, 19.0947, 9), "u2mwdd8q4");
/// ```
pub fn encode(lat: f64, lon: f64, precision: usize) -> String {
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut out = String::with_capacity(precision);
    let mut even = true;
    let mut bit = 0u8;
    let mut idx = 0usize;

    while out.len() < precision {
        let (range, v) = if even {
            (&mut lon_range, lon)
        } else {
            (&mut lat_range, lat)
        };
        let mid = (range.0 + range.1) / 2.0;
        if v >= mid {
            idx = idx * 2 + 1;
            range.0 = mid;
        } else {
            idx *= 2;
            range.1 = mid;
        }
        even = !even;

        bit += 1;
        if bit == 5 {
            out.push(BASE32[idx] as char);
            bit = 0;
            idx = 0;
        }
    }
    out
}

/// Bounding box of a geohash cell as `(min_lat, min_lon, max_lat, max_lon)`.
///
/// Returns `None` for an empty string or one containing characters outside
/// the geohash alphabet.
pub fn decode_bbox(hash: &str) -> Option<(f64, f64, f64, f64)> {
    if hash.is_empty() {
        return None;
    }
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut even = true;

    for c in hash.chars() {
        let bits = decode_char(c)?;
        for shift in (0..5).rev() {
            let range = if even { &mut lon_range } else { &mut lat_range };
            let mid = (range.0 + range.1) / 2.0;
            if (bits >> shift) & 1 == 1 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            even = !even;
        }
    }
    Some((lat_range.0, lon_range.0, lat_range.1, lon_range.1))
}

/// Centre of a geohash cell as `(lat, lon)`.
pub fn decode(hash: &str) -> Option<(f64, f64)> {
    decode_bbox(hash).map(|(min_lat, min_lon, max_lat, max_lon)| {
        ((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0)
    })
}

/// Every prefix of `hash`, longest first.
pub fn prefix_ladder(hash: &str) -> impl Iterator<Item = &str> + '_ {
    // geohash characters are ASCII, so byte offsets are char offsets
    (1..=hash.len()).rev().map(move |len| &hash[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_points() {
        assert_eq!(encode(47.5636, 19.0947, 9), "u2mwdd8q4");
        assert_eq!(encode(57.64911, 10.40744, 11), "u4pruydqqvj");
        assert_eq!(encode(0.0, 0.0, 1), "s");
    }

    #[test]
    fn decode_lands_inside_cell() {
        let (lat, lon) = decode("u4pruydqqvj").unwrap();
        assert!((lat - 57.64911).abs() < 1e-5);
        assert!((lon - 10.40744).abs() < 1e-5);
    }

    #[test]
    fn decode_then_encode_is_stable() {
        let (lat, lon) = decode("u2mwdd8q4").unwrap();
        assert_eq!(encode(lat, lon, 9), "u2mwdd8q4");
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert!(decode("").is_none());
        assert!(decode("u2ma").is_none()); // 'a' is not in the alphabet
        assert!(decode("U2MW").is_some());
    }

    #[test]
    fn ladder_shrinks_one_char_at_a_time() {
        let ladder: Vec<_> = prefix_ladder("u2mw").collect();
        assert_eq!(ladder, vec!["u2mw", "u2m", "u2", "u"]);
    }
}
