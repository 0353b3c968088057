// crates/geotags-core/src/namespace.rs

//! Namespace names used by generated tags, and the option-dependent
//! inflection between ISO labels and flat key names.

use crate::options::Options;
use crate::reference::CountryField;

pub const DD: &str = "dd";
pub const LAT: &str = "lat";
pub const LON: &str = "lon";

pub const COUNTRY_CODE: &str = "countryCode";
pub const COUNTRY_NAME: &str = "countryName";
pub const REGION_CODE: &str = "regionCode";
pub const CITY_NAME: &str = "cityName";
pub const PLANET_NAME: &str = "planetName";
pub const CONTINENT_NAME: &str = "continentName";
pub const CONTINENT_CODE: &str = "continentCode";

pub const ISO_3166_1: &str = "ISO-3166-1";
pub const ISO_3166_2: &str = "ISO-3166-2";
pub const ISO_3166_3: &str = "ISO-3166-3";
pub const UN_M49: &str = "UN M49";

/// Namespace for base country code tags.
pub fn iso31661_namespace(opts: &Options) -> &'static str {
    if opts.iso_as_namespace {
        ISO_3166_1
    } else {
        COUNTRY_CODE
    }
}

/// Namespace for subdivision tags.
pub fn iso31662_namespace(opts: &Options) -> &'static str {
    if opts.iso_as_namespace {
        ISO_3166_2
    } else {
        REGION_CODE
    }
}

/// Namespace for country-change tags.
pub fn iso31663_namespace(opts: &Options) -> &'static str {
    if opts.iso_as_namespace {
        ISO_3166_3
    } else {
        COUNTRY_CODE
    }
}

pub fn continent_code_namespace(opts: &Options) -> &'static str {
    if opts.un_m49_as_namespace {
        UN_M49
    } else {
        CONTINENT_CODE
    }
}

/// Flat key for a country field: the name goes under `countryName`, every
/// code under `countryCode`.
pub fn country_tag_key(field: CountryField) -> &'static str {
    match field {
        CountryField::Name => COUNTRY_NAME,
        _ => COUNTRY_CODE,
    }
}

/// Namespace for a base country tag carrying `field`.
pub fn country_field_namespace(field: CountryField, opts: &Options) -> &'static str {
    if field == CountryField::Name {
        COUNTRY_NAME
    } else if opts.iso_as_namespace {
        ISO_3166_1
    } else {
        country_tag_key(field)
    }
}

/// Namespaces holding base country codes, whatever the inflection.
pub(crate) fn is_country_code_namespace(ns: &str) -> bool {
    ns == COUNTRY_CODE || ns == ISO_3166_1
}

pub(crate) fn is_region_code_namespace(ns: &str) -> bool {
    ns == REGION_CODE || ns == ISO_3166_2
}
