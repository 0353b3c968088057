// crates/geotags-core/src/options.rs

//! # Options
//!
//! [`Options`] is the fully resolved, immutable configuration used for one
//! call. Callers describe only what they want to change through
//! [`PartialOptions`]; [`Options::resolve`] overlays it onto the defaults and
//! then applies the option coupling rules in [`Options::normalized`].

use serde::{Deserialize, Serialize};

/// Upper bound on the number of fractional digits kept for coordinates.
pub const DEFAULT_MAX_RESOLUTION: u32 = 10;

/// Resolved configuration.
///
/// The tri-state fields (`city_name`, `country_code`, ...) are `None` unless
/// the caller set them. `Some(true)` re-enables a sub-category whose parent
/// flag was turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub dedupe: bool,
    pub sort: bool,
    pub sanitize: bool,

    /// Use `ISO-3166-x` as namespaces instead of `countryCode`/`regionCode`.
    pub iso_as_namespace: bool,
    /// Use `UN M49` as the continent code namespace instead of `continentCode`.
    pub un_m49_as_namespace: bool,

    pub geohash: bool,
    /// Decode the input `geohash` field when `lat`/`lon` are absent.
    pub decode_geohash: bool,
    pub gps: bool,
    pub dd_max_resolution: u32,

    pub iso31661: bool,
    pub iso31662: bool,
    pub iso31663: bool,

    pub city: bool,
    pub city_name: Option<bool>,

    pub country: bool,
    pub country_name: Option<bool>,
    pub country_code: Option<bool>,

    pub region: bool,
    pub region_code: Option<bool>,

    pub continent: bool,
    pub continent_name: Option<bool>,
    pub continent_code: Option<bool>,

    pub planet: bool,
    pub planet_name: Option<bool>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            dedupe: true,
            sort: false,
            sanitize: true,
            iso_as_namespace: false,
            un_m49_as_namespace: true,
            geohash: true,
            decode_geohash: true,
            gps: false,
            dd_max_resolution: DEFAULT_MAX_RESOLUTION,
            iso31661: true,
            iso31662: false,
            iso31663: false,
            city: true,
            city_name: None,
            country: true,
            country_name: None,
            country_code: None,
            region: true,
            region_code: None,
            continent: true,
            continent_name: None,
            continent_code: None,
            planet: false,
            planet_name: None,
        }
    }
}

/// Caller-supplied overrides. Every field is optional; unknown JSON keys are
/// ignored.
///
/// ```rust
/// use geotags_core::options::{Options, PartialOptions};
///
/// let partial: PartialOptions = serde_json::from_str(r#"{"gps": true, "iso31663": true}"#).unwrap();
/// let opts = Options::resolve(&partial);
/// assert!(opts.gps);
/// assert!(opts.iso31661); // forced on by iso31663
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialOptions {
    pub dedupe: Option<bool>,
    pub sort: Option<bool>,
    pub sanitize: Option<bool>,
    pub iso_as_namespace: Option<bool>,
    pub un_m49_as_namespace: Option<bool>,
    pub geohash: Option<bool>,
    pub decode_geohash: Option<bool>,
    pub gps: Option<bool>,
    pub dd_max_resolution: Option<u32>,
    pub iso31661: Option<bool>,
    pub iso31662: Option<bool>,
    pub iso31663: Option<bool>,
    pub city: Option<bool>,
    pub city_name: Option<bool>,
    pub country: Option<bool>,
    pub country_name: Option<bool>,
    pub country_code: Option<bool>,
    pub region: Option<bool>,
    pub region_code: Option<bool>,
    pub continent: Option<bool>,
    pub continent_name: Option<bool>,
    pub continent_code: Option<bool>,
    pub planet: Option<bool>,
    pub planet_name: Option<bool>,
}

impl Options {
    /// Overlay `partial` onto the defaults, then normalize.
    pub fn resolve(partial: &PartialOptions) -> Self {
        Self::default().merged(partial).normalized()
    }

    /// Overlay `partial` onto `self` without normalizing.
    pub fn merged(self, p: &PartialOptions) -> Self {
        Options {
            dedupe: p.dedupe.unwrap_or(self.dedupe),
            sort: p.sort.unwrap_or(self.sort),
            sanitize: p.sanitize.unwrap_or(self.sanitize),
            iso_as_namespace: p.iso_as_namespace.unwrap_or(self.iso_as_namespace),
            un_m49_as_namespace: p.un_m49_as_namespace.unwrap_or(self.un_m49_as_namespace),
            geohash: p.geohash.unwrap_or(self.geohash),
            decode_geohash: p.decode_geohash.unwrap_or(self.decode_geohash),
            gps: p.gps.unwrap_or(self.gps),
            dd_max_resolution: p.dd_max_resolution.unwrap_or(self.dd_max_resolution),
            iso31661: p.iso31661.unwrap_or(self.iso31661),
            iso31662: p.iso31662.unwrap_or(self.iso31662),
            iso31663: p.iso31663.unwrap_or(self.iso31663),
            city: p.city.unwrap_or(self.city),
            city_name: p.city_name.or(self.city_name),
            country: p.country.unwrap_or(self.country),
            country_name: p.country_name.or(self.country_name),
            country_code: p.country_code.or(self.country_code),
            region: p.region.unwrap_or(self.region),
            region_code: p.region_code.or(self.region_code),
            continent: p.continent.unwrap_or(self.continent),
            continent_name: p.continent_name.or(self.continent_name),
            continent_code: p.continent_code.or(self.continent_code),
            planet: p.planet.unwrap_or(self.planet),
            planet_name: p.planet_name.or(self.planet_name),
        }
    }

    /// Apply coupling rules between flags.
    ///
    /// Change detection needs the base country record, so `iso31663`
    /// switches `iso31661` on.
    pub fn normalized(mut self) -> Self {
        if self.iso31663 && !self.iso31661 {
            tracing::debug!("iso31663 requires iso31661; enabling it");
            self.iso31661 = true;
        }
        self
    }

    #[inline]
    pub fn city_enabled(&self) -> bool {
        self.city || self.city_name == Some(true)
    }

    #[inline]
    pub fn planet_enabled(&self) -> bool {
        self.planet || self.planet_name == Some(true)
    }

    #[inline]
    pub fn continent_name_enabled(&self) -> bool {
        self.continent || self.continent_name == Some(true)
    }

    #[inline]
    pub fn continent_code_enabled(&self) -> bool {
        self.continent || self.continent_code == Some(true)
    }

    /// Country code tags are stripped when `country` is off and
    /// `countryCode` was not explicitly re-enabled.
    #[inline]
    pub fn strips_country_code(&self) -> bool {
        !self.country && self.country_code != Some(true)
    }

    #[inline]
    pub fn strips_country_name(&self) -> bool {
        !self.country && self.country_name != Some(true)
    }

    #[inline]
    pub fn strips_region_code(&self) -> bool {
        !self.region && self.region_code != Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overlay_keeps_defaults() {
        assert_eq!(Options::resolve(&PartialOptions::default()), Options::default());
    }

    #[test]
    fn caller_value_wins() {
        let p = PartialOptions {
            sort: Some(true),
            geohash: Some(false),
            dd_max_resolution: Some(9),
            ..Default::default()
        };
        let o = Options::resolve(&p);
        assert!(o.sort);
        assert!(!o.geohash);
        assert_eq!(o.dd_max_resolution, 9);
        assert!(o.dedupe);
    }

    #[test]
    fn iso31663_forces_iso31661() {
        let p = PartialOptions {
            iso31661: Some(false),
            iso31663: Some(true),
            ..Default::default()
        };
        assert!(Options::resolve(&p).iso31661);

        let p = PartialOptions {
            iso31661: Some(false),
            ..Default::default()
        };
        assert!(!Options::resolve(&p).iso31661);
    }

    #[test]
    fn deserializes_camel_case_and_nulls() {
        let p: PartialOptions = serde_json::from_str(
            r#"{"isoAsNamespace": true, "unM49AsNamespace": false, "cityName": null, "countryCode": true, "legacy": false}"#,
        )
        .unwrap();
        assert_eq!(p.iso_as_namespace, Some(true));
        assert_eq!(p.un_m49_as_namespace, Some(false));
        assert_eq!(p.city_name, None);
        assert_eq!(p.country_code, Some(true));
    }

    #[test]
    fn sub_flags_re_enable_categories() {
        let p = PartialOptions {
            country: Some(false),
            country_code: Some(true),
            city: Some(false),
            city_name: Some(true),
            ..Default::default()
        };
        let o = Options::resolve(&p);
        assert!(!o.strips_country_code());
        assert!(o.strips_country_name());
        assert!(o.city_enabled());
    }
}
