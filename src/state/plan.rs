#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use floorplan::plan::{LoadedPlan, ReservationOutcome, apply_reservation_outcome, dimension_buckets, price_bounds};
use floorplan::selection::SelectionState;
use floorplan::units::{StorageUnit, UnitId};
use floorplan::visual_state::is_interactive;

/// Progress of the plan metadata request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Units, selection, and filters for the tenant being viewed.
///
/// This is the single source of truth the floor plan paints from; the
/// `floorplan` controller never stores a copy of units or selection.
#[derive(Clone, Debug, Default)]
pub struct PlanState {
    pub tenant: Option<String>,
    pub status: LoadStatus,
    pub image_url: Option<String>,
    pub units: Vec<StorageUnit>,
    pub selection: SelectionState,
    /// Units with a shape on the plan, reported by the host after binding.
    pub bound: Vec<UnitId>,
    /// Bumped on every plan request; responses carrying an older value are dropped.
    pub request_seq: u64,
}

impl PlanState {
    /// Start loading `tenant`.
    ///
    /// Switching tenants discards the previous plan, selection, and filters.
    /// Reloading the same tenant keeps them until the response arrives.
    pub fn begin_load(&mut self, tenant: &str) -> u64 {
        self.request_seq += 1;
        if self.tenant.as_deref() != Some(tenant) {
            self.tenant = Some(tenant.to_owned());
            self.units.clear();
            self.selection = SelectionState::new();
            self.bound.clear();
        }
        self.status = LoadStatus::Loading;
        self.image_url = None;
        self.request_seq
    }

    /// Apply a plan response. Returns `false` if a newer request superseded it.
    ///
    /// Selections of units missing from the new plan are dropped.
    pub fn finish_load(&mut self, seq: u64, result: Result<LoadedPlan, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match result {
            Ok(plan) => {
                self.image_url = Some(plan.image_url);
                self.units = plan.units;
                self.selection.retain_known(&self.units);
                let units = &self.units;
                self.bound.retain(|id| units.iter().any(|u| &u.id == id));
                self.status = LoadStatus::Ready;
            }
            Err(message) => {
                self.units.clear();
                self.selection.clear();
                self.bound.clear();
                self.status = LoadStatus::Failed(message);
            }
        }
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn unit(&self, id: &UnitId) -> Option<&StorageUnit> {
        self.units.iter().find(|u| &u.id == id)
    }

    /// Toggle `id` if the current filters and status allow it.
    pub fn toggle(&mut self, id: &UnitId) -> bool {
        let Some(unit) = self.unit(id) else {
            return false;
        };
        if !is_interactive(unit, &self.selection.filters, self.selection.selected_ids()) {
            return false;
        }
        self.selection.toggle(id);
        true
    }

    pub fn set_dimension_filter(&mut self, value: Option<f64>) {
        self.selection.set_dimension_filter(value);
    }

    pub fn set_max_price_filter(&mut self, value: Option<f64>) {
        self.selection.set_max_price_filter(value);
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear_filters();
    }

    /// Units the host could not place on the plan, in unit order.
    #[must_use]
    pub fn unbound_units(&self) -> Vec<&StorageUnit> {
        self.units.iter().filter(|u| !self.bound.contains(&u.id)).collect()
    }

    #[must_use]
    pub fn dimension_buckets(&self) -> Vec<f64> {
        dimension_buckets(&self.units)
    }

    #[must_use]
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        price_bounds(&self.units)
    }

    /// Owned copies of the selected units, in selection order.
    #[must_use]
    pub fn selected_units(&self) -> Vec<StorageUnit> {
        self.selection.selected_units(&self.units).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.selection.total_price(&self.units)
    }

    /// Fold a batch reservation result into units and selection.
    pub fn apply_outcome(&mut self, outcome: &ReservationOutcome) -> usize {
        apply_reservation_outcome(&mut self.units, &mut self.selection, outcome)
    }
}
