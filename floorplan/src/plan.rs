//! Backend plan payload and reservation bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The plan endpoint returns an image reference and a unit list. Everything the
//! floor plan needs is validated here: a missing image or a non-array unit list
//! fails the whole tenant load, while individual malformed unit entries are
//! skipped with a warning. Reservation submission happens in the host; this
//! module only records per-unit outcomes and applies them.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use serde_json::Value;

use crate::selection::{SelectionState, same_dimension};
use crate::units::{RawStorageUnit, StorageUnit, UnitId};

/// Error returned by [`parse_plan`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The payload is not a JSON object.
    #[error("plan response is not an object")]
    NotAnObject,
    /// No usable image reference.
    #[error("plan has no floor-plan image")]
    MissingImage,
    /// The unit list is missing or not an array.
    #[error("plan unit list is missing or not a list")]
    UnitsNotArray,
}

/// A tenant's plan after validation and enrichment.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPlan {
    /// Fetchable URL of the SVG floor plan.
    pub image_url: String,
    pub units: Vec<StorageUnit>,
}

const IMAGE_KEYS: [&str; 4] = ["planImage", "image", "imageUrl", "svgUrl"];
const UNIT_KEYS: [&str; 2] = ["units", "storageUnits"];

/// Validate a plan payload, resolve its image URL against `base_url`, and enrich every unit.
///
/// # Errors
///
/// Returns a [`PlanError`] when the image reference is absent or the unit list is not an array.
pub fn parse_plan(payload: &Value, base_url: &str) -> Result<LoadedPlan, PlanError> {
    let object = payload.as_object().ok_or(PlanError::NotAnObject)?;

    let reference = IMAGE_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(PlanError::MissingImage)?;

    let entries = UNIT_KEYS
        .iter()
        .find_map(|key| object.get(*key))
        .and_then(Value::as_array)
        .ok_or(PlanError::UnitsNotArray)?;

    let units = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<RawStorageUnit>(entry.clone()) {
            Ok(raw) => Some(StorageUnit::enrich(&raw)),
            Err(e) => {
                log::warn!("skipping unit entry {index}: {e}");
                None
            }
        })
        .collect();

    Ok(LoadedPlan { image_url: resolve_image_url(reference, base_url), units })
}

/// Absolute and protocol-relative references are kept; paths are joined onto `base_url`.
#[must_use]
pub fn resolve_image_url(reference: &str, base_url: &str) -> String {
    let reference = reference.trim();
    let lower = reference.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("//")
        || lower.starts_with("data:")
        || lower.starts_with("blob:")
    {
        return reference.to_owned();
    }
    let base = base_url.trim_end_matches('/');
    let path = reference.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Distinct positive areas in ascending order, for the dimension filter.
#[must_use]
pub fn dimension_buckets(units: &[StorageUnit]) -> Vec<f64> {
    let mut areas: Vec<f64> = units.iter().filter(|u| u.has_dimensions()).map(|u| u.dimensions).collect();
    areas.sort_by(f64::total_cmp);
    areas.dedup_by(|a, b| same_dimension(*a, *b));
    areas
}

/// Lowest and highest monthly price, if there are any units.
#[must_use]
pub fn price_bounds(units: &[StorageUnit]) -> Option<(f64, f64)> {
    units.iter().map(|u| u.price).fold(None, |acc, price| match acc {
        None => Some((price, price)),
        Some((lo, hi)) => Some((lo.min(price), hi.max(price))),
    })
}

/// Why one unit of a batch could not be reserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationFailure {
    pub unit_id: UnitId,
    pub number: String,
    pub message: String,
}

/// Per-unit results of a batch reservation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationOutcome {
    pub succeeded: Vec<UnitId>,
    pub failed: Vec<ReservationFailure>,
}

impl ReservationOutcome {
    /// Record the result of reserving `unit`.
    pub fn record(&mut self, unit: &StorageUnit, result: Result<(), String>) {
        match result {
            Ok(()) => self.succeeded.push(unit.id.clone()),
            Err(message) => self.failed.push(ReservationFailure {
                unit_id: unit.id.clone(),
                number: unit.number.clone(),
                message,
            }),
        }
    }

    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Unit numbers that failed, for the summary message.
    #[must_use]
    pub fn failed_numbers(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.number.as_str()).collect()
    }
}

/// Mark succeeded units reserved and drop them from the selection.
///
/// Failed units keep their status and stay selected so the user can retry them.
/// Returns how many units changed status.
pub fn apply_reservation_outcome(
    units: &mut [StorageUnit],
    selection: &mut SelectionState,
    outcome: &ReservationOutcome,
) -> usize {
    let mut changed = 0;
    for unit in units.iter_mut().filter(|u| outcome.succeeded.contains(&u.id)) {
        unit.mark_reserved();
        changed += 1;
    }
    selection.deselect_all(&outcome.succeeded);
    for failure in &outcome.failed {
        log::warn!("reservation failed for unit {}: {}", failure.number, failure.message);
    }
    changed
}
