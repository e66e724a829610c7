//! Area normalization for the backend's ambiguous dimension fields.
//!
//! A unit's size may arrive as a `"WxH"` string, a bare number (as text or as
//! a JSON number), an explicit `area`, or separate `width`/`height`/`length`
//! values. [`compute_dimensions`] runs a prioritized chain of extractors, each
//! returning `Option<f64>`, and takes the first success. When nothing yields a
//! positive area the result is `0.0` and a diagnostic is logged; the unit stays
//! usable but never matches a dimension filter.

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod dimensions_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::units::{DimensionField, RawStorageUnit, parse_decimal};

/// `<number><x|X|×|*><number>`, each operand using `.` or `,` as decimal mark
/// and optionally followed by a metre unit (`"2 m x 1 m"`, `"2,5 x 3 m"`).
static PAIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"^\s*(\d+(?:[.,]\d+)?)\s*(?:m²|m2|m)?\s*[xX×*]\s*(\d+(?:[.,]\d+)?)\s*(?:m²|m2|m)?\s*$";
    Regex::new(pattern).expect("static dimension pair pattern")
});

/// A single number, optionally followed by a square-metre unit.
static BARE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*(?:m²|m2|m)?\s*$").expect("static bare dimension pattern")
});

/// One step of the resolution chain.
pub type Extractor = fn(&RawStorageUnit) -> Option<f64>;

/// Resolution order; first success wins.
pub const EXTRACTORS: [Extractor; 5] = [
    from_dimension_pair,
    from_dimension_text,
    from_dimension_number,
    from_area,
    from_width_and_depth,
];

/// Normalized area of a raw unit, or `0.0` when it cannot be determined.
#[must_use]
pub fn compute_dimensions(raw: &RawStorageUnit) -> f64 {
    if let Some(area) = EXTRACTORS.iter().find_map(|extract| extract(raw)) {
        return area;
    }
    log::warn!(
        "unit {}: could not determine dimensions (dimensions={}, area={:?}, width={:?}, height={:?}, length={:?})",
        raw.display_number(),
        raw.dimensions.as_ref().map_or_else(|| "none".to_owned(), ToString::to_string),
        raw.area,
        raw.width,
        raw.height,
        raw.length,
    );
    0.0
}

/// Display label: the author's original text when present, else `"<area> m²"`.
#[must_use]
pub fn dimensions_label(raw: &RawStorageUnit, area: f64) -> String {
    match &raw.dimensions {
        Some(DimensionField::Text(text)) if !text.trim().is_empty() => text.clone(),
        _ => format_area(area),
    }
}

/// Format an area the way labels and filter buttons show it.
#[must_use]
pub fn format_area(area: f64) -> String {
    let rounded = (area * 100.0).round() / 100.0;
    format!("{rounded} m²")
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn dimension_text(raw: &RawStorageUnit) -> Option<&str> {
    match &raw.dimensions {
        Some(DimensionField::Text(text)) => Some(text.as_str()),
        _ => None,
    }
}

/// Step 1: `"2x1"`, `"2,5 × 3"`, `"2*1.5"`.
#[must_use]
pub fn from_dimension_pair(raw: &RawStorageUnit) -> Option<f64> {
    let caps = PAIR_PATTERN.captures(dimension_text(raw)?)?;
    let width = positive(parse_decimal(caps.get(1)?.as_str())?)?;
    let depth = positive(parse_decimal(caps.get(2)?.as_str())?)?;
    positive(width * depth)
}

/// Step 2: text holding a single number. Pair-shaped text is never read as a bare number.
#[must_use]
pub fn from_dimension_text(raw: &RawStorageUnit) -> Option<f64> {
    let text = dimension_text(raw)?;
    if PAIR_PATTERN.is_match(text) {
        return None;
    }
    let caps = BARE_PATTERN.captures(text)?;
    positive(parse_decimal(caps.get(1)?.as_str())?)
}

/// Step 3: `dimensions` already numeric.
#[must_use]
pub fn from_dimension_number(raw: &RawStorageUnit) -> Option<f64> {
    match raw.dimensions {
        Some(DimensionField::Number(n)) => positive(n),
        _ => None,
    }
}

/// Step 4: explicit `area`.
#[must_use]
pub fn from_area(raw: &RawStorageUnit) -> Option<f64> {
    positive(raw.area?)
}

/// Step 5: `width * height`, else `width * length`.
#[must_use]
pub fn from_width_and_depth(raw: &RawStorageUnit) -> Option<f64> {
    let width = positive(raw.width?)?;
    let depth = raw.height.and_then(positive).or_else(|| raw.length.and_then(positive))?;
    positive(width * depth)
}
