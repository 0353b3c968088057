// crates/geotags-core/src/continent.rs

//! Continent tags.
//!
//! Continents are not looked up in any table; the input record carries the
//! name and code directly. Each is gated separately so a caller can turn the
//! `continent` category off and still ask for just the code.

use crate::input::GeoInput;
use crate::namespace::{continent_code_namespace, CONTINENT_NAME};
use crate::options::Options;
use crate::tag::Tag;

/// Append continent name and code tags, in that order.
pub fn append_continent_tags(input: &GeoInput, opts: &Options, out: &mut Vec<Tag>) {
    if opts.continent_name_enabled() {
        if let Some(name) = non_empty(&input.continent_name) {
            out.push(Tag::label(CONTINENT_NAME));
            out.push(Tag::value(name, CONTINENT_NAME));
        }
    }

    if opts.continent_code_enabled() {
        if let Some(code) = non_empty(&input.continent_code) {
            let ns = continent_code_namespace(opts);
            out.push(Tag::label(ns));
            out.push(Tag::value(code, ns));
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
