// crates/geotags-core/src/tag.rs

//! # Tags
//!
//! A tag is a short array of strings. Three shapes exist:
//!
//! | variant            | wire form                                  |
//! |--------------------|--------------------------------------------|
//! | [`Tag::Label`]     | `["G", namespace]`                         |
//! | [`Tag::Value`]     | `["g", value, namespace]` or `["g", value, namespace, qualifier]` |
//! | [`Tag::Geohash`]   | `["g", value]`                             |
//!
//! Tags serialize to JSON arrays and can be read back from them; reading
//! rejects anything that is not one of the shapes above.

use crate::error::{GeoTagError, Result};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Marker introducing a namespace declaration.
pub const LABEL_MARKER: char = 'G';
/// Marker introducing a value (or a bare geohash).
pub const VALUE_MARKER: char = 'g';

/// One generated tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub enum Tag {
    /// Declares a namespace that the following value tags belong to.
    Label { namespace: String },
    /// A value under a namespace, optionally narrowed by a qualifier
    /// such as `alpha-2`.
    Value {
        value: String,
        namespace: String,
        qualifier: Option<String>,
    },
    /// One step of the geohash prefix ladder.
    Geohash { value: String },
}

impl Tag {
    pub fn label(namespace: impl Into<String>) -> Self {
        Tag::Label {
            namespace: namespace.into(),
        }
    }

    pub fn value(value: impl Into<String>, namespace: impl Into<String>) -> Self {
        Tag::Value {
            value: value.into(),
            namespace: namespace.into(),
            qualifier: None,
        }
    }

    pub fn qualified(
        value: impl Into<String>,
        namespace: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Tag::Value {
            value: value.into(),
            namespace: namespace.into(),
            qualifier: Some(qualifier.into()),
        }
    }

    pub fn geohash(value: impl Into<String>) -> Self {
        Tag::Geohash {
            value: value.into(),
        }
    }

    /// `G` for labels, `g` for everything else.
    #[inline]
    pub fn marker(&self) -> char {
        match self {
            Tag::Label { .. } => LABEL_MARKER,
            Tag::Value { .. } | Tag::Geohash { .. } => VALUE_MARKER,
        }
    }

    #[inline]
    pub fn is_label(&self) -> bool {
        matches!(self, Tag::Label { .. })
    }

    /// The carried value; labels have none.
    pub fn value_str(&self) -> Option<&str> {
        match self {
            Tag::Label { .. } => None,
            Tag::Value { value, .. } | Tag::Geohash { value } => Some(value.as_str()),
        }
    }

    /// The namespace of a label or value tag; geohash tags have none.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Tag::Label { namespace } | Tag::Value { namespace, .. } => Some(namespace.as_str()),
            Tag::Geohash { .. } => None,
        }
    }

    pub fn qualifier(&self) -> Option<&str> {
        match self {
            Tag::Value { qualifier, .. } => qualifier.as_deref(),
            _ => None,
        }
    }

    /// The string fields after the marker, in wire order.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Tag::Label { namespace } => vec![namespace.as_str()],
            Tag::Value {
                value,
                namespace,
                qualifier,
            } => {
                let mut out = vec![value.as_str(), namespace.as_str()];
                if let Some(q) = qualifier {
                    out.push(q);
                }
                out
            }
            Tag::Geohash { value } => vec![value.as_str()],
        }
    }

    /// Wire form as owned strings, marker included.
    pub fn to_strings(&self) -> Vec<String> {
        std::iter::once(self.marker().to_string())
            .chain(self.fields().into_iter().map(str::to_owned))
            .collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.marker())?;
        for field in self.fields() {
            write!(f, ", {field}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut seq = serializer.serialize_seq(Some(fields.len() + 1))?;
        seq.serialize_element(&self.marker().to_string())?;
        for field in fields {
            seq.serialize_element(field)?;
        }
        seq.end()
    }
}

fn non_empty_str<'a>(raw: &'a Value, position: usize) -> Result<&'a str> {
    match raw {
        Value::String(s) if !s.is_empty() => Ok(s),
        Value::String(_) => Err(GeoTagError::InvalidTag(format!(
            "empty string at position {position}"
        ))),
        other => Err(GeoTagError::InvalidTag(format!(
            "expected string at position {position}, got {}",
            json_kind(other)
        ))),
    }
}

/// Short type name of a JSON value, used in error messages.
pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&Value> for Tag {
    type Error = GeoTagError;

    fn try_from(raw: &Value) -> Result<Self> {
        let items = raw
            .as_array()
            .ok_or_else(|| GeoTagError::InvalidTag(format!("expected array, got {}", json_kind(raw))))?;

        let marker = match items.first() {
            Some(Value::String(m)) => m.as_str(),
            _ => return Err(GeoTagError::InvalidTag("missing marker".into())),
        };

        match (marker, items.len()) {
            ("G", 2) => Ok(Tag::label(non_empty_str(&items[1], 1)?)),
            ("g", 2) => Ok(Tag::geohash(non_empty_str(&items[1], 1)?)),
            ("g", 3) => Ok(Tag::value(
                non_empty_str(&items[1], 1)?,
                non_empty_str(&items[2], 2)?,
            )),
            ("g", 4) => Ok(Tag::qualified(
                non_empty_str(&items[1], 1)?,
                non_empty_str(&items[2], 2)?,
                non_empty_str(&items[3], 3)?,
            )),
            ("G", n) | ("g", n) => Err(GeoTagError::InvalidTag(format!(
                "unexpected length {n} for marker {marker}"
            ))),
            _ => Err(GeoTagError::InvalidTag(format!("unknown marker {marker:?}"))),
        }
    }
}

impl TryFrom<Value> for Tag {
    type Error = GeoTagError;

    fn try_from(raw: Value) -> Result<Self> {
        Tag::try_from(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_arrays() {
        let tags = vec![
            Tag::label("countryCode"),
            Tag::qualified("HU", "countryCode", "alpha-2"),
            Tag::value("Hungary", "countryName"),
            Tag::geohash("u2m"),
        ];
        let out = serde_json::to_value(&tags).unwrap();
        assert_eq!(
            out,
            json!([
                ["G", "countryCode"],
                ["g", "HU", "countryCode", "alpha-2"],
                ["g", "Hungary", "countryName"],
                ["g", "u2m"]
            ])
        );
    }

    #[test]
    fn reads_back_from_json() {
        let tags: Vec<Tag> =
            serde_json::from_str(r#"[["G","lat"],["g","47.5","lat"],["g","u2"]]"#).unwrap();
        assert_eq!(
            tags,
            vec![Tag::label("lat"), Tag::value("47.5", "lat"), Tag::geohash("u2")]
        );
    }

    #[test]
    fn rejects_malformed_arrays() {
        for raw in [
            json!(["x", "foo"]),
            json!(["g", null, "ns"]),
            json!(["g", 3, "ns"]),
            json!(["G"]),
            json!(["g", "a", "b", "c", "d"]),
            json!({"g": "a"}),
            json!(["g", "", "ns"]),
        ] {
            assert!(Tag::try_from(&raw).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn display_matches_wire_order() {
        let t = Tag::qualified("HUN", "countryCode", "alpha-3");
        assert_eq!(t.to_string(), "[g, HUN, countryCode, alpha-3]");
        assert_eq!(t.to_strings(), vec!["g", "HUN", "countryCode", "alpha-3"]);
    }
}
