// crates/geotags-core/src/pipeline.rs

//! # Post-processing
//!
//! Raw generator output goes through four passes, always in this order:
//!
//! ```text
//! filter (feature flags) -> dedupe -> sort -> sanitize
//! ```
//!
//! Filtering always runs; the other three are switched by
//! [`Options::dedupe`], [`Options::sort`] and [`Options::sanitize`]. Every
//! pass is idempotent.

use crate::namespace::{
    is_country_code_namespace, is_region_code_namespace, iso31661_namespace, iso31662_namespace,
    iso31663_namespace, COUNTRY_NAME, ISO_3166_3,
};
use crate::options::Options;
use crate::tag::Tag;
use serde_json::Value;
use std::collections::HashSet;

/// Run every enabled pass over `tags`.
pub fn apply(tags: Vec<Tag>, opts: &Options) -> Vec<Tag> {
    let mut tags = filter_by_options(tags, opts);
    if opts.dedupe {
        tags = dedupe(tags);
    }
    if opts.sort {
        tags = sort_tags_by_key(tags);
    }
    if opts.sanitize {
        tags = sanitize(tags);
    }
    tags
}

/// Drop every label and value tag under `namespace`. Geohash tags carry no
/// namespace and are never touched.
pub fn filter_out_namespace(mut tags: Vec<Tag>, namespace: &str) -> Vec<Tag> {
    tags.retain(|t| t.namespace() != Some(namespace));
    tags
}

/// Remove the categories the caller switched off.
///
/// A category flag set to `false` removes its namespaces unless the matching
/// sub-flag is explicitly `true`.
pub fn filter_by_options(mut tags: Vec<Tag>, opts: &Options) -> Vec<Tag> {
    if opts.strips_country_code() {
        tags = filter_out_namespace(tags, iso31661_namespace(opts));
        tags = filter_out_namespace(tags, iso31663_namespace(opts));
    }
    if opts.strips_country_name() {
        tags = filter_out_namespace(tags, COUNTRY_NAME);
    }
    if opts.strips_region_code() {
        tags = filter_out_namespace(tags, iso31662_namespace(opts));
    }
    tags
}

/// Remove repeated tags, keeping the first occurrence.
///
/// - Labels are always kept.
/// - Value tags repeat when `(value, namespace)` was already kept; geohash
///   tags when the same hash was.
/// - A change tag (`ISO-3166-3`) is also dropped when an earlier value tag
///   outside that namespace carries the same value and qualifier.
/// - Subdivision tags whose value equals a country code are removed; the
///   country keeps the slot.
pub fn dedupe(tags: Vec<Tag>) -> Vec<Tag> {
    let mut keep = vec![true; tags.len()];

    {
        // Duplicates share their value, so this set is the same before and
        // after the pass.
        let country_codes: HashSet<&str> = tags
            .iter()
            .filter(|t| !t.is_label())
            .filter(|t| t.namespace().is_some_and(is_country_code_namespace))
            .filter_map(Tag::value_str)
            .collect();

        let mut seen_values: HashSet<(&str, &str)> = HashSet::new();
        let mut seen_geohashes: HashSet<&str> = HashSet::new();
        let mut seen_qualified: HashSet<(&str, Option<&str>)> = HashSet::new();

        for (i, tag) in tags.iter().enumerate() {
            keep[i] = match tag {
                Tag::Label { .. } => true,
                Tag::Geohash { value } => seen_geohashes.insert(value.as_str()),
                Tag::Value {
                    value,
                    namespace,
                    qualifier,
                } => {
                    let is_change = namespace.as_str() == ISO_3166_3;
                    let qualified = (value.as_str(), qualifier.as_deref());
                    if is_region_code_namespace(namespace) && country_codes.contains(value.as_str())
                    {
                        false
                    } else if is_change && seen_qualified.contains(&qualified) {
                        false
                    } else if !seen_values.insert((value.as_str(), namespace.as_str())) {
                        false
                    } else {
                        if !is_change {
                            seen_qualified.insert(qualified);
                        }
                        true
                    }
                }
            };
        }
    }

    let before = tags.len();
    let out: Vec<Tag> = tags
        .into_iter()
        .zip(keep)
        .filter_map(|(t, k)| k.then_some(t))
        .collect();
    if out.len() != before {
        tracing::trace!(dropped = before - out.len(), "dedupe removed tags");
    }
    out
}

/// Stable sort by marker: every label first, then every value tag, each
/// group keeping its original order.
pub fn sort_tags_by_key(mut tags: Vec<Tag>) -> Vec<Tag> {
    tags.sort_by_key(Tag::marker);
    tags
}

/// Drop tags with an empty field.
pub fn sanitize(mut tags: Vec<Tag>) -> Vec<Tag> {
    tags.retain(|t| {
        let ok = t.fields().iter().all(|f| !f.is_empty());
        if !ok {
            tracing::trace!(tag = %t, "sanitize dropped tag with empty field");
        }
        ok
    });
    tags
}

/// Read raw JSON tag arrays, dropping every entry that is not a well-formed
/// tag (unknown marker, wrong length, or a value position that is not a
/// non-empty string).
///
/// ```rust
/// use geotags_core::pipeline::sanitize_raw;
/// use serde_json::json;
///
/// let raw = [json!(["g", null, "ns"]), json!(["g", "HU", "countryCode", "alpha-2"])];
/// let tags = sanitize_raw(&raw);
/// assert_eq!(tags.len(), 1);
/// ```
pub fn sanitize_raw(raw: &[Value]) -> Vec<Tag> {
    raw.iter()
        .filter_map(|v| match Tag::try_from(v) {
            Ok(tag) => Some(tag),
            Err(e) => {
                tracing::trace!(error = %e, "sanitize dropped raw tag");
                None
            }
        })
        .collect()
}
