// crates/geotags-core/tests/properties.rs

use geotags_core::geohash;
use geotags_core::pipeline::{dedupe, sanitize, sort_tags_by_key};
use geotags_core::resolution::resolution_ladder;
use geotags_core::{GeoInput, GeoTagger, Options, ReferenceData, Tag};
use proptest::prelude::*;

const NAMESPACES: &[&str] = &[
    "countryCode",
    "countryName",
    "regionCode",
    "ISO-3166-1",
    "ISO-3166-2",
    "ISO-3166-3",
    "cityName",
    "lat",
];

fn namespace() -> impl Strategy<Value = String> {
    prop::sample::select(NAMESPACES).prop_map(str::to_owned)
}

fn qualifier() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(&["alpha-2", "alpha-3", "numeric"][..]).prop_map(str::to_owned),
    )
}

/// Small alphabet so collisions actually happen.
fn value() -> impl Strategy<Value = String> {
    "[A-C]{0,2}"
}

fn tag() -> impl Strategy<Value = Tag> {
    prop_oneof![
        namespace().prop_map(Tag::label),
        (value(), namespace(), qualifier()).prop_map(|(value, namespace, qualifier)| Tag::Value {
            value,
            namespace,
            qualifier,
        }),
        value().prop_map(Tag::geohash),
    ]
}

fn tags() -> impl Strategy<Value = Vec<Tag>> {
    prop::collection::vec(tag(), 0..24)
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(tags in tags()) {
        let once = sanitize(tags);
        prop_assert_eq!(sanitize(once.clone()), once);
    }

    #[test]
    fn dedupe_is_idempotent(tags in tags()) {
        let once = dedupe(tags);
        prop_assert_eq!(dedupe(once.clone()), once);
    }

    #[test]
    fn dedupe_keeps_every_label(tags in tags()) {
        let labels = tags.iter().filter(|t| t.is_label()).count();
        let out = dedupe(tags);
        prop_assert_eq!(out.iter().filter(|t| t.is_label()).count(), labels);
    }

    #[test]
    fn sort_is_idempotent_and_ordered(tags in tags()) {
        let once = sort_tags_by_key(tags.clone());
        prop_assert_eq!(sort_tags_by_key(once.clone()), once.clone());
        prop_assert!(once.windows(2).all(|w| w[0].marker() <= w[1].marker()));
        prop_assert_eq!(once.len(), tags.len());
    }

    #[test]
    fn sort_is_stable_within_marker(tags in tags()) {
        let sorted = sort_tags_by_key(tags.clone());
        let values_before: Vec<_> = tags.iter().filter(|t| !t.is_label()).collect();
        let values_after: Vec<_> = sorted.iter().filter(|t| !t.is_label()).collect();
        prop_assert_eq!(values_before, values_after);
    }

    #[test]
    fn geohash_ladder_shrinks_by_prefix(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let hash = geohash::encode(lat, lon, geohash::DEFAULT_PRECISION);
        let ladder: Vec<_> = geohash::prefix_ladder(&hash).collect();
        prop_assert_eq!(ladder.len(), 9);
        for (i, step) in ladder.iter().enumerate() {
            prop_assert_eq!(step.len(), 9 - i);
            prop_assert!(hash.starts_with(step));
        }
    }

    #[test]
    fn geohash_cell_contains_its_point(lat in -89.0f64..89.0, lon in -179.0f64..179.0) {
        let hash = geohash::encode(lat, lon, 9);
        let (min_lat, min_lon, max_lat, max_lon) = geohash::decode_bbox(&hash).unwrap();
        prop_assert!(min_lat <= lat && lat <= max_lat);
        prop_assert!(min_lon <= lon && lon <= max_lon);
    }

    #[test]
    fn resolution_ladder_never_grows(v in -180.0f64..180.0, max in 1u32..=10) {
        let ladder = resolution_ladder(v, max);
        prop_assert!(!ladder.is_empty());
        prop_assert!(ladder.len() as u32 <= max);
        let lens: Vec<_> = ladder.iter().map(String::len).collect();
        prop_assert!(lens.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn generated_output_is_a_fixed_point(lat in -89.0f64..89.0, lon in -179.0f64..179.0, sort in any::<bool>()) {
        let data = ReferenceData::bundled().unwrap();
        let opts = Options { gps: true, sort, iso31662: true, iso31663: true, ..Options::default() };
        let input = GeoInput {
            lat: Some(lat),
            lon: Some(lon),
            country_code: Some("HU".into()),
            region_name: Some("Budapest".into()),
            ..Default::default()
        };
        let tags = GeoTagger::new(data, opts).tag(&input);
        let again = sanitize(dedupe(tags.clone()));
        let again = if sort { sort_tags_by_key(again) } else { again };
        prop_assert_eq!(again, tags);
    }
}
