// crates/geotags-core/src/reference/mod.rs

//! # Reference Data
//!
//! The three ISO 3166 tables the generator consults:
//!
//! - **Part 1**: current countries (`alpha2`, `alpha3`, `numeric`, `name`).
//! - **Part 2**: subdivisions, keyed by parent country and name.
//! - **Part 3**: retired codes, each mapping one former country onto one or
//!   more successors.
//!
//! Tables are immutable once built. All lookups are exact-match and linear;
//! the tables are small enough that an index would not pay for itself.

use serde::{Deserialize, Serialize};

mod loader;

/// A country entry (ISO 3166-1), also used for both sides of a change record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub alpha2: String,
    pub alpha3: String,
    /// Numeric code as a zero-padded string (`"004"`). Empty where none was
    /// ever assigned.
    #[serde(default)]
    pub numeric: String,
    pub name: String,
}

/// A subdivision entry (ISO 3166-2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Full code, e.g. `HU-BU`.
    pub code: String,
    pub name: String,
    /// Alpha-2 code of the parent country.
    pub parent: String,
}

/// A retired code and its successors (ISO 3166-3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryChange {
    pub from: Country,
    pub to: Vec<Country>,
}

/// One of the four country fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryField {
    Alpha2,
    Alpha3,
    Numeric,
    Name,
}

impl CountryField {
    /// Emission order for country tags.
    pub const ALL: [CountryField; 4] = [
        CountryField::Alpha2,
        CountryField::Alpha3,
        CountryField::Numeric,
        CountryField::Name,
    ];

    /// Qualifier carried by code tags. The name has none.
    pub fn qualifier(self) -> Option<&'static str> {
        match self {
            CountryField::Alpha2 => Some("alpha-2"),
            CountryField::Alpha3 => Some("alpha-3"),
            CountryField::Numeric => Some("numeric"),
            CountryField::Name => None,
        }
    }

    #[inline]
    pub fn is_code(self) -> bool {
        self != CountryField::Name
    }
}

impl Country {
    pub fn field(&self, field: CountryField) -> &str {
        match field {
            CountryField::Alpha2 => &self.alpha2,
            CountryField::Alpha3 => &self.alpha3,
            CountryField::Numeric => &self.numeric,
            CountryField::Name => &self.name,
        }
    }
}

/// Outcome of checking one country field against the change table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeResolution<'a> {
    /// The value is a retired one; these are its successors, in table order
    /// and without repeats.
    Superseded(Vec<&'a str>),
    /// The value is itself a successor in some change record.
    Current,
    /// The value never took part in a change.
    Unchanged,
}

impl<'a> ChangeResolution<'a> {
    /// The values a field resolves to; `original` itself unless superseded.
    pub fn values(&self, original: &'a str) -> Vec<&'a str> {
        match self {
            ChangeResolution::Superseded(successors) => successors.clone(),
            ChangeResolution::Current | ChangeResolution::Unchanged => vec![original],
        }
    }
}

/// Simple aggregate statistics for the loaded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStats {
    pub countries: usize,
    pub subdivisions: usize,
    pub changes: usize,
}

/// The three ISO 3166 tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    countries: Vec<Country>,
    subdivisions: Vec<Subdivision>,
    changes: Vec<CountryChange>,
}

impl ReferenceData {
    pub fn new(
        countries: Vec<Country>,
        subdivisions: Vec<Subdivision>,
        changes: Vec<CountryChange>,
    ) -> Self {
        ReferenceData {
            countries,
            subdivisions,
            changes,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn subdivisions(&self) -> &[Subdivision] {
        &self.subdivisions
    }

    pub fn changes(&self) -> &[CountryChange] {
        &self.changes
    }

    pub fn stats(&self) -> DataStats {
        DataStats {
            countries: self.countries.len(),
            subdivisions: self.subdivisions.len(),
            changes: self.changes.len(),
        }
    }

    /// Exact, case-sensitive alpha-2 lookup.
    pub fn find_country(&self, alpha2: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.alpha2 == alpha2)
    }

    /// Exact lookup by parent country code and subdivision name.
    pub fn find_subdivision(&self, parent: &str, name: &str) -> Option<&Subdivision> {
        self.subdivisions
            .iter()
            .find(|s| s.parent == parent && s.name == name)
    }

    /// Check `value` of `field` against the change table.
    ///
    /// A match on any former entry wins over a match on a successor, so a
    /// code that was retired and later reassigned (`AI`, `SK`, `GE`) reports
    /// the successors of its retired meaning.
    ///
    /// ```rust
    /// use geotags_core::reference::{ChangeResolution, CountryField, ReferenceData};
    ///
    /// let data = ReferenceData::bundled().unwrap();
    /// assert_eq!(
    ///     data.resolve_change(CountryField::Alpha2, "AI"),
    ///     ChangeResolution::Superseded(vec!["DJ"])
    /// );
    /// assert_eq!(data.resolve_change(CountryField::Alpha2, "DE"), ChangeResolution::Current);
    /// assert_eq!(data.resolve_change(CountryField::Alpha2, "HU"), ChangeResolution::Unchanged);
    /// ```
    pub fn resolve_change(&self, field: CountryField, value: &str) -> ChangeResolution<'_> {
        if value.is_empty() {
            return ChangeResolution::Unchanged;
        }

        let mut successors: Vec<&str> = Vec::new();
        for change in self.changes.iter().filter(|c| c.from.field(field) == value) {
            for to in &change.to {
                let v = to.field(field);
                if !v.is_empty() && !successors.contains(&v) {
                    successors.push(v);
                }
            }
        }
        if !successors.is_empty() {
            return ChangeResolution::Superseded(successors);
        }

        let is_successor = self
            .changes
            .iter()
            .flat_map(|c| c.to.iter())
            .any(|to| to.field(field) == value);
        if is_successor {
            ChangeResolution::Current
        } else {
            ChangeResolution::Unchanged
        }
    }
}
