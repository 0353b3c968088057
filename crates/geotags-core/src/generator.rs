// crates/geotags-core/src/generator.rs

//! # Tag Generator
//!
//! Turns one [`GeoInput`] into the raw tag list, section by section:
//!
//! 1. decimal degrees and the `lat`/`lon` truncation ladders (`gps`)
//! 2. the geohash prefix ladder (`geohash`)
//! 3. base country codes and name (`iso31661`)
//! 4. successors of retired country codes (`iso31663`)
//! 5. subdivision code (`iso31662`)
//! 6. city, continent and planet
//!
//! Each section writes its label before its values. Nothing here removes
//! tags; that is the job of [`crate::pipeline`].

use crate::continent::append_continent_tags;
use crate::geohash::{self, DEFAULT_PRECISION};
use crate::input::GeoInput;
use crate::namespace::{
    country_field_namespace, iso31661_namespace, iso31662_namespace, iso31663_namespace,
    CITY_NAME, COUNTRY_NAME, DD, LAT, LON, PLANET_NAME,
};
use crate::options::Options;
use crate::pipeline;
use crate::reference::{Country, CountryField, ReferenceData};
use crate::resolution::{format_coordinate, resolution_ladder};
use crate::tag::Tag;

/// Planet reported when the input names none.
pub const DEFAULT_PLANET: &str = "Earth";

/// Generates tags against one set of reference tables and options.
///
/// ```rust
/// use geotags_core::{GeoInput, GeoTagger, Options, ReferenceData, Tag};
///
/// let data = ReferenceData::bundled().unwrap();
/// let tagger = GeoTagger::new(data, Options::default());
/// let input = GeoInput {
///     country_code: Some("HU".into()),
///     ..Default::default()
/// };
/// let tags = tagger.tag(&input);
/// assert!(tags.contains(&Tag::qualified("HUN", "countryCode", "alpha-3")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeoTagger<'a> {
    data: &'a ReferenceData,
    opts: Options,
}

impl<'a> GeoTagger<'a> {
    /// The options are normalized on the way in.
    pub fn new(data: &'a ReferenceData, opts: Options) -> Self {
        GeoTagger {
            data,
            opts: opts.normalized(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn reference_data(&self) -> &'a ReferenceData {
        self.data
    }

    /// Generate and post-process tags for `input`.
    pub fn tag(&self, input: &GeoInput) -> Vec<Tag> {
        let raw = self.generate_raw(input);
        let raw_len = raw.len();
        let tags = pipeline::apply(raw, &self.opts);
        tracing::trace!(raw = raw_len, kept = tags.len(), "generated tags");
        tags
    }

    /// Every tag the enabled sections produce, before filtering, dedupe,
    /// sorting or sanitation.
    pub fn generate_raw(&self, input: &GeoInput) -> Vec<Tag> {
        let mut out = Vec::new();
        let opts = &self.opts;

        if let Some((lat, lon)) = input.coordinates(opts.decode_geohash) {
            if opts.gps {
                self.append_gps(lat, lon, &mut out);
            }
            if opts.geohash {
                append_geohash(lat, lon, &mut out);
            }
        }

        if opts.iso31661 {
            if let Some(country) = self.lookup_country(input) {
                self.append_country(country, &mut out);
                if opts.iso31663 {
                    self.append_changes(country, &mut out);
                }
            }
        }

        if opts.iso31662 {
            self.append_subdivision(input, &mut out);
        }

        if opts.city_enabled() {
            if let Some(city) = non_empty(&input.city_name) {
                out.push(Tag::label(CITY_NAME));
                out.push(Tag::value(city, CITY_NAME));
            }
        }

        append_continent_tags(input, opts, &mut out);

        if opts.planet_enabled() {
            let planet = non_empty(&input.planet_name).unwrap_or(DEFAULT_PLANET);
            out.push(Tag::label(PLANET_NAME));
            out.push(Tag::value(planet, PLANET_NAME));
        }

        out
    }

    fn append_gps(&self, lat: f64, lon: f64, out: &mut Vec<Tag>) {
        let max = self.opts.dd_max_resolution;

        out.push(Tag::label(DD));
        out.push(Tag::value(
            format!("{}, {}", format_coordinate(lat), format_coordinate(lon)),
            DD,
        ));

        for (ns, v) in [(LAT, lat), (LON, lon)] {
            out.push(Tag::label(ns));
            out.extend(
                resolution_ladder(v, max)
                    .into_iter()
                    .map(|step| Tag::value(step, ns)),
            );
        }
    }

    fn lookup_country(&self, input: &GeoInput) -> Option<&'a Country> {
        let code = non_empty(&input.country_code)?;
        let found = self.data.find_country(code);
        if found.is_none() {
            tracing::debug!(country_code = code, "no ISO 3166-1 entry for country code");
        }
        found
    }

    fn append_country(&self, country: &Country, out: &mut Vec<Tag>) {
        let code_ns = iso31661_namespace(&self.opts);
        out.push(Tag::label(code_ns));
        for field in CountryField::ALL.into_iter().filter(|f| f.is_code()) {
            let value = country.field(field);
            let Some(q) = field.qualifier() else { continue };
            if !value.is_empty() {
                out.push(Tag::qualified(value, country_field_namespace(field, &self.opts), q));
            }
        }

        if !country.name.is_empty() {
            out.push(Tag::label(COUNTRY_NAME));
            out.push(Tag::value(&country.name, COUNTRY_NAME));
        }
    }

    /// Successor codes for any retired code the country carries. Only values
    /// that differ from the current ones are emitted, and never the name.
    fn append_changes(&self, country: &Country, out: &mut Vec<Tag>) {
        let ns = iso31663_namespace(&self.opts);
        let mut changed = Vec::new();

        for field in CountryField::ALL.into_iter().filter(|f| f.is_code()) {
            let original = country.field(field);
            let Some(q) = field.qualifier() else { continue };
            let resolution = self.data.resolve_change(field, original);
            for v in resolution.values(original) {
                if v != original && !v.is_empty() {
                    changed.push(Tag::qualified(v, ns, q));
                }
            }
        }

        if changed.is_empty() {
            return;
        }
        tracing::debug!(
            country = %country.alpha2,
            successors = changed.len(),
            "country carries retired codes"
        );
        out.push(Tag::label(ns));
        out.extend(changed);
    }

    fn append_subdivision(&self, input: &GeoInput, out: &mut Vec<Tag>) {
        let (Some(parent), Some(name)) =
            (non_empty(&input.country_code), non_empty(&input.region_name))
        else {
            return;
        };

        match self.data.find_subdivision(parent, name) {
            Some(sub) if !sub.code.is_empty() => {
                let ns = iso31662_namespace(&self.opts);
                out.push(Tag::label(ns));
                out.push(Tag::value(&sub.code, ns));
            }
            _ => tracing::debug!(
                country_code = parent,
                region_name = name,
                "no ISO 3166-2 entry for region"
            ),
        }
    }
}

fn append_geohash(lat: f64, lon: f64, out: &mut Vec<Tag>) {
    let hash = geohash::encode(lat, lon, DEFAULT_PRECISION);
    out.extend(geohash::prefix_ladder(&hash).map(Tag::geohash));
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{CountryChange, Subdivision};

    fn country(alpha2: &str, alpha3: &str, numeric: &str, name: &str) -> Country {
        Country {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            numeric: numeric.into(),
            name: name.into(),
        }
    }

    fn data() -> ReferenceData {
        ReferenceData::new(
            vec![
                country("HU", "HUN", "348", "Hungary"),
                country("AI", "AIA", "660", "Anguilla"),
            ],
            vec![Subdivision {
                code: "HU-BU".into(),
                name: "Budapest".into(),
                parent: "HU".into(),
            }],
            vec![CountryChange {
                from: country("AI", "AFI", "262", "French Afars and Issas"),
                to: vec![country("DJ", "DJI", "262", "Djibouti")],
            }],
        )
    }

    #[test]
    fn raw_output_follows_section_order() {
        let data = data();
        let opts = Options {
            gps: true,
            geohash: false,
            iso31662: true,
            planet: true,
            ..Options::default()
        };
        let input = GeoInput {
            lat: Some(47.0),
            lon: Some(19.0),
            country_code: Some("HU".into()),
            region_name: Some("Budapest".into()),
            city_name: Some("Budapest".into()),
            ..Default::default()
        };
        let raw = GeoTagger::new(&data, opts).generate_raw(&input);
        let labels: Vec<_> = raw
            .iter()
            .filter(|t| t.is_label())
            .filter_map(Tag::namespace)
            .collect();
        assert_eq!(
            labels,
            vec!["dd", "lat", "lon", "countryCode", "countryName", "regionCode", "cityName", "planetName"]
        );
        assert!(raw.contains(&Tag::value("47, 19", "dd")));
        assert!(raw.contains(&Tag::value("Earth", "planetName")));
    }

    #[test]
    fn zero_is_a_coordinate() {
        let data = data();
        let opts = Options {
            gps: true,
            ..Options::default()
        };
        let input = GeoInput {
            lat: Some(0.0),
            lon: Some(0.0),
            ..Default::default()
        };
        let raw = GeoTagger::new(&data, opts).generate_raw(&input);
        assert!(raw.contains(&Tag::value("0, 0", "dd")));
        assert!(raw.contains(&Tag::geohash("s")));
    }

    #[test]
    fn change_tags_only_list_differences() {
        let data = data();
        let opts = Options {
            iso31663: true,
            ..Options::default()
        };
        let input = GeoInput {
            country_code: Some("AI".into()),
            ..Default::default()
        };
        let raw = GeoTagger::new(&data, opts).generate_raw(&input);
        let tail: Vec<_> = raw
            .iter()
            .skip_while(|t| t.namespace() != Some("countryName"))
            .skip(2)
            .collect();
        // AI -> DJ, AIA is not retired, 262 is unchanged
        assert_eq!(
            tail,
            vec![&Tag::label("countryCode"), &Tag::qualified("DJ", "countryCode", "alpha-2")]
        );
    }

    #[test]
    fn no_change_label_without_changes() {
        let data = data();
        let opts = Options {
            iso31663: true,
            iso_as_namespace: true,
            ..Options::default()
        };
        let input = GeoInput {
            country_code: Some("HU".into()),
            ..Default::default()
        };
        let raw = GeoTagger::new(&data, opts).generate_raw(&input);
        assert!(raw.iter().all(|t| t.namespace() != Some("ISO-3166-3")));
    }

    #[test]
    fn iso31663_alone_still_looks_up_country() {
        let data = data();
        let opts = Options {
            iso31661: false,
            iso31663: true,
            ..Options::default()
        };
        let tagger = GeoTagger::new(&data, opts);
        assert!(tagger.options().iso31661);
    }

    #[test]
    fn unknown_codes_produce_nothing() {
        let data = data();
        let opts = Options {
            iso31662: true,
            iso31663: true,
            ..Options::default()
        };
        let input = GeoInput {
            country_code: Some("XX".into()),
            region_name: Some("Nowhere".into()),
            ..Default::default()
        };
        assert!(GeoTagger::new(&data, opts).generate_raw(&input).is_empty());
    }

    #[test]
    fn planet_name_from_input() {
        let data = data();
        let opts = Options {
            planet_name: Some(true),
            ..Options::default()
        };
        let input = GeoInput {
            planet_name: Some("Mars".into()),
            ..Default::default()
        };
        let raw = GeoTagger::new(&data, opts).generate_raw(&input);
        assert_eq!(raw, vec![Tag::label("planetName"), Tag::value("Mars", "planetName")]);
    }
}
