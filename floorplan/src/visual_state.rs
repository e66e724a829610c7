//! Visual state of a bound unit: which fill it gets and whether it reacts to clicks.
//!
//! Rule order in [`fill`] is load-bearing: selection overrides everything, then
//! occupancy, then filters.

#[cfg(test)]
#[path = "visual_state_test.rs"]
mod visual_state_test;

use crate::consts::{FILL_AVAILABLE, FILL_FILTERED_OUT, FILL_OCCUPIED, FILL_SELECTED};
use crate::selection::UnitFilters;
use crate::units::{StorageUnit, UnitId};

/// One of the four discrete visual states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitFill {
    Selected,
    /// Occupied, reserved, maintenance, or unknown status.
    Occupied,
    FilteredOut,
    Available,
}

impl UnitFill {
    /// CSS color applied as the shape's `fill`.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Selected => FILL_SELECTED,
            Self::Occupied => FILL_OCCUPIED,
            Self::FilteredOut => FILL_FILTERED_OUT,
            Self::Available => FILL_AVAILABLE,
        }
    }

    /// Class added to the shape for styling hooks.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Selected => "unit--selected",
            Self::Occupied => "unit--occupied",
            Self::FilteredOut => "unit--filtered",
            Self::Available => "unit--available",
        }
    }
}

/// Resolve the visual state of `unit`.
#[must_use]
pub fn fill(unit: &StorageUnit, filters: &UnitFilters, selected: &[UnitId]) -> UnitFill {
    if selected.contains(&unit.id) {
        UnitFill::Selected
    } else if !unit.is_available() {
        UnitFill::Occupied
    } else if !filters.admits_dimension(unit) || !filters.admits_price(unit) {
        UnitFill::FilteredOut
    } else {
        UnitFill::Available
    }
}

/// Whether clicking `unit` should toggle it.
///
/// Already-selected units are always clickable so they can be removed, even when
/// a filter or their status would otherwise exclude them.
#[must_use]
pub fn is_interactive(unit: &StorageUnit, filters: &UnitFilters, selected: &[UnitId]) -> bool {
    selected.contains(&unit.id) || (unit.is_available() && filters.admits(unit))
}

/// Pointer cursor matching [`is_interactive`].
#[must_use]
pub fn cursor(interactive: bool) -> &'static str {
    if interactive { "pointer" } else { "not-allowed" }
}
