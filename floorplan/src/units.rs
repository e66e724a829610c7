//! Storage-unit records: the raw backend shape and the enriched form the
//! floor plan works with.
//!
//! DESIGN
//! ======
//! Backend records are loosely typed (identifiers may be numbers or strings,
//! numeric fields may arrive as strings, status casing varies). Deserializers
//! here accept all of those and never fail a record for a malformed optional
//! field; missing data degrades to `None` and is handled during enrichment.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dimensions::{compute_dimensions, dimensions_label};

/// Backend identifier of a storage unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UnitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) if !s.trim().is_empty() => Ok(Self(s.trim().to_owned())),
            Value::Number(n) => Ok(Self(n.to_string())),
            _ => Err(D::Error::custom("expected non-empty string or number identifier")),
        }
    }
}

/// Occupancy status reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
    /// Missing or unrecognized status. Never selectable.
    #[default]
    Unknown,
}

impl UnitStatus {
    /// Parse a backend status label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "available" | "disponible" | "free" => Self::Available,
            "occupied" | "ocupado" | "rented" => Self::Occupied,
            "reserved" | "reservado" => Self::Reserved,
            "maintenance" | "mantenimiento" => Self::Maintenance,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for UnitStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::from_label(&s),
            _ => Self::Unknown,
        })
    }
}

/// The ambiguous `dimensions` field: either free text (`"2x1"`, `"3,5"`) or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum DimensionField {
    Text(String),
    Number(f64),
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A unit exactly as the plan endpoint returns it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStorageUnit {
    pub id: UnitId,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub number: Option<String>,
    #[serde(default, alias = "shape_id", alias = "svgId", deserialize_with = "deserialize_label")]
    pub shape_id: Option<String>,
    #[serde(default)]
    pub status: UnitStatus,
    #[serde(default, rename = "type", deserialize_with = "deserialize_label")]
    pub unit_type: Option<String>,
    #[serde(default, alias = "monthlyPrice", deserialize_with = "deserialize_lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_dimension_field")]
    pub dimensions: Option<DimensionField>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub length: Option<f64>,
}

impl RawStorageUnit {
    /// Minimal record with only an identifier; every other field absent.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: UnitId::new(id),
            number: None,
            shape_id: None,
            status: UnitStatus::Unknown,
            unit_type: None,
            price: None,
            dimensions: None,
            area: None,
            width: None,
            height: None,
            length: None,
        }
    }

    /// Human-facing unit number, falling back to the identifier.
    #[must_use]
    pub fn display_number(&self) -> &str {
        self.number.as_deref().unwrap_or(self.id.as_str())
    }
}

/// A unit after dimension enrichment. Only `status` changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StorageUnit {
    pub id: UnitId,
    pub number: String,
    pub shape_id: Option<String>,
    pub status: UnitStatus,
    pub unit_type: Option<String>,
    pub price: f64,
    /// Normalized area; `0.0` means it could not be determined.
    pub dimensions: f64,
    pub dimensions_label: String,
}

impl StorageUnit {
    /// Enrich a raw record. Pure and deterministic.
    #[must_use]
    pub fn enrich(raw: &RawStorageUnit) -> Self {
        let dimensions = compute_dimensions(raw);
        Self {
            id: raw.id.clone(),
            number: raw.display_number().to_owned(),
            shape_id: raw.shape_id.clone(),
            status: raw.status,
            unit_type: raw.unit_type.clone(),
            price: raw.price.unwrap_or(0.0).max(0.0),
            dimensions,
            dimensions_label: dimensions_label(raw, dimensions),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == UnitStatus::Available
    }

    /// Whether the area is known and usable for dimension filtering.
    #[must_use]
    pub fn has_dimensions(&self) -> bool {
        self.dimensions > 0.0
    }

    /// Transition after a successful reservation.
    pub fn mark_reserved(&mut self) {
        self.status = UnitStatus::Reserved;
    }
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_decimal(&s),
        _ => None,
    })
}

fn deserialize_dimension_field<'de, D>(deserializer: D) -> Result<Option<DimensionField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(DimensionField::Text(s)),
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(DimensionField::Number),
        _ => None,
    })
}

/// Parse a decimal accepting either `.` or `,` as the decimal mark.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    match text.trim().replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
