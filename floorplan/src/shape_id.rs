//! Shape-identifier matching between backend units and SVG elements.
//!
//! Plan authors and backend operators rarely agree on casing or zero padding
//! (`T12`, `t12`, `T012`). [`variants_of`] expands one identifier into an
//! ordered candidate list and [`resolve_element`] returns the first candidate
//! present in the document.

#[cfg(test)]
#[path = "shape_id_test.rs"]
mod shape_id_test;

use std::sync::LazyLock;

use regex::Regex;

/// `<letters><optional whitespace><digits>`.
static PREFIXED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\s*(\d+)$").expect("static shape id pattern"));

/// Anything that can look up an element by exact `id` attribute.
pub trait ShapeLookup {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Ordered, de-duplicated candidate identifiers for `shape_id`.
#[must_use]
pub fn variants_of(shape_id: &str) -> Vec<String> {
    let trimmed = shape_id.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut variants: Vec<String> = Vec::with_capacity(5);
    let mut push = |candidate: String| {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };

    push(trimmed.to_owned());
    push(trimmed.to_uppercase());

    if let Some(caps) = PREFIXED_NUMBER.captures(trimmed) {
        let prefix = caps.get(1).map_or("", |m| m.as_str()).to_uppercase();
        let digits = caps.get(2).map_or("", |m| m.as_str());
        if let Some(number) = normalize_digits(digits) {
            push(format!("{prefix}{number}"));
            push(format!("{prefix}{number:0>2}"));
            push(format!("{prefix}{number:0>3}"));
        }
    }

    variants
}

/// Strip leading zeros, keeping a single `0` for all-zero input.
fn normalize_digits(digits: &str) -> Option<String> {
    if digits.is_empty() {
        return None;
    }
    let stripped = digits.trim_start_matches('0');
    Some(if stripped.is_empty() { "0".to_owned() } else { stripped.to_owned() })
}

/// First element whose `id` equals one of the variants, tried in order.
pub fn resolve_element<L: ShapeLookup>(lookup: &L, shape_id: &str) -> Option<(String, L::Element)> {
    variants_of(shape_id)
        .into_iter()
        .find_map(|candidate| lookup.element_by_id(&candidate).map(|el| (candidate, el)))
}
