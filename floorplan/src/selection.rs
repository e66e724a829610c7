//! Selected units and active filters.
//!
//! Selection is sticky: changing a filter never drops a selected unit. Filters
//! only affect which *other* units can be picked and how they are colored.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::consts::DIMENSION_EPSILON;
use crate::units::{StorageUnit, UnitId};

/// Active filters. `None` means "no filter".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitFilters {
    /// Dimension bucket (area) a unit must match.
    pub dimension: Option<f64>,
    /// Maximum monthly price, inclusive.
    pub max_price: Option<f64>,
}

impl UnitFilters {
    /// Whether `unit` passes every active filter. Status is not considered.
    ///
    /// A unit whose area could not be determined never matches a dimension filter.
    #[must_use]
    pub fn admits(&self, unit: &StorageUnit) -> bool {
        self.admits_dimension(unit) && self.admits_price(unit)
    }

    #[must_use]
    pub fn admits_dimension(&self, unit: &StorageUnit) -> bool {
        self.dimension
            .is_none_or(|bucket| unit.has_dimensions() && same_dimension(unit.dimensions, bucket))
    }

    #[must_use]
    pub fn admits_price(&self, unit: &StorageUnit) -> bool {
        self.max_price.is_none_or(|max| unit.price <= max)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dimension.is_some() || self.max_price.is_some()
    }
}

/// Tolerant area comparison shared by filtering and bucket derivation.
#[must_use]
pub fn same_dimension(a: f64, b: f64) -> bool {
    (a - b).abs() <= DIMENSION_EPSILON
}

/// Selection set (insertion-ordered) plus filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    selected: Vec<UnitId>,
    pub filters: UnitFilters,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the unit if absent, remove it if present.
    pub fn toggle(&mut self, id: &UnitId) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.clone());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn set_dimension_filter(&mut self, value: Option<f64>) {
        self.filters.dimension = value.filter(|v| v.is_finite() && *v > 0.0);
    }

    pub fn set_max_price_filter(&mut self, value: Option<f64>) {
        self.filters.max_price = value.filter(|v| v.is_finite() && *v >= 0.0);
    }

    pub fn clear_filters(&mut self) {
        self.filters = UnitFilters::default();
    }

    #[must_use]
    pub fn is_selected(&self, id: &UnitId) -> bool {
        self.selected.contains(id)
    }

    /// Selected identifiers in the order they were picked.
    #[must_use]
    pub fn selected_ids(&self) -> &[UnitId] {
        &self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Remove the given identifiers, e.g. after they were reserved.
    pub fn deselect_all(&mut self, ids: &[UnitId]) {
        self.selected.retain(|id| !ids.contains(id));
    }

    /// Drop selections that no longer exist in `units`. Returns how many were dropped.
    pub fn retain_known(&mut self, units: &[StorageUnit]) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| units.iter().any(|u| &u.id == id));
        let dropped = before - self.selected.len();
        if dropped > 0 {
            log::debug!("dropped {dropped} stale selection(s) after plan reload");
        }
        dropped
    }

    /// Selected units resolved against `units`, in selection order.
    #[must_use]
    pub fn selected_units<'a>(&self, units: &'a [StorageUnit]) -> Vec<&'a StorageUnit> {
        self.selected
            .iter()
            .filter_map(|id| units.iter().find(|u| &u.id == id))
            .collect()
    }

    /// Sum of monthly prices of the selected units.
    #[must_use]
    pub fn total_price(&self, units: &[StorageUnit]) -> f64 {
        self.selected_units(units).iter().map(|u| u.price).sum()
    }
}
