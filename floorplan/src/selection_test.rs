#![allow(clippy::float_cmp)]

use super::*;
use crate::units::UnitStatus;

fn unit(id: &str, dimensions: f64, price: f64) -> StorageUnit {
    StorageUnit {
        id: UnitId::new(id),
        number: id.to_owned(),
        shape_id: None,
        status: UnitStatus::Available,
        unit_type: None,
        price,
        dimensions,
        dimensions_label: String::new(),
    }
}

// =============================================================
// toggle / clear
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut state = SelectionState::new();
    let id = UnitId::new("a");
    state.toggle(&id);
    assert!(state.is_selected(&id));
    state.toggle(&id);
    assert!(!state.is_selected(&id));
}

#[test]
fn double_toggle_restores_original_contents() {
    let mut state = SelectionState::new();
    state.toggle(&UnitId::new("a"));
    state.toggle(&UnitId::new("b"));
    let before = state.clone();
    state.toggle(&UnitId::new("c"));
    state.toggle(&UnitId::new("c"));
    assert_eq!(state, before);
    state.toggle(&UnitId::new("a"));
    state.toggle(&UnitId::new("a"));
    assert_eq!(state.len(), 2);
}

#[test]
fn selection_keeps_insertion_order() {
    let mut state = SelectionState::new();
    for id in ["c", "a", "b"] {
        state.toggle(&UnitId::new(id));
    }
    let ids: Vec<&str> = state.selected_ids().iter().map(UnitId::as_str).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn clear_empties_selection_but_keeps_filters() {
    let mut state = SelectionState::new();
    state.set_dimension_filter(Some(2.0));
    state.toggle(&UnitId::new("a"));
    state.clear();
    assert!(state.is_empty());
    assert_eq!(state.filters.dimension, Some(2.0));
}

// =============================================================
// Filters
// =============================================================

#[test]
fn changing_filters_never_clears_selection() {
    let mut state = SelectionState::new();
    state.toggle(&UnitId::new("a"));
    state.set_dimension_filter(Some(3.0));
    state.set_max_price_filter(Some(10.0));
    state.set_dimension_filter(None);
    assert!(state.is_selected(&UnitId::new("a")));
}

#[test]
fn invalid_filter_values_mean_no_filter() {
    let mut state = SelectionState::new();
    state.set_dimension_filter(Some(0.0));
    assert_eq!(state.filters.dimension, None);
    state.set_dimension_filter(Some(f64::NAN));
    assert_eq!(state.filters.dimension, None);
    state.set_max_price_filter(Some(-1.0));
    assert_eq!(state.filters.max_price, None);
    state.set_max_price_filter(Some(0.0));
    assert_eq!(state.filters.max_price, Some(0.0));
}

#[test]
fn dimension_match_is_tolerant() {
    let filters = UnitFilters { dimension: Some(0.3), max_price: None };
    assert!(filters.admits(&unit("a", 0.1 * 3.0, 10.0)));
    assert!(!filters.admits(&unit("b", 0.31, 10.0)));
}

#[test]
fn zero_area_unit_fails_dimension_filter_only() {
    let u = unit("a", 0.0, 10.0);
    assert!(UnitFilters::default().admits(&u));
    assert!(!UnitFilters { dimension: Some(1.0), max_price: None }.admits(&u));
}

#[test]
fn is_active_reflects_filters() {
    assert!(!UnitFilters::default().is_active());
    assert!(UnitFilters { dimension: None, max_price: Some(5.0) }.is_active());
}

// =============================================================
// Plan reload / totals
// =============================================================

#[test]
fn retain_known_drops_stale_selections() {
    let mut state = SelectionState::new();
    state.toggle(&UnitId::new("a"));
    state.toggle(&UnitId::new("gone"));
    let units = vec![unit("a", 2.0, 10.0), unit("b", 2.0, 10.0)];
    assert_eq!(state.retain_known(&units), 1);
    assert_eq!(state.selected_ids(), [UnitId::new("a")]);
}

#[test]
fn deselect_all_removes_given_ids() {
    let mut state = SelectionState::new();
    for id in ["a", "b", "c"] {
        state.toggle(&UnitId::new(id));
    }
    state.deselect_all(&[UnitId::new("a"), UnitId::new("c")]);
    assert_eq!(state.selected_ids(), [UnitId::new("b")]);
}

#[test]
fn total_price_sums_selected_units() {
    let units = vec![unit("a", 2.0, 40.0), unit("b", 2.0, 60.5), unit("c", 2.0, 99.0)];
    let mut state = SelectionState::new();
    state.toggle(&UnitId::new("a"));
    state.toggle(&UnitId::new("b"));
    assert_eq!(state.total_price(&units), 100.5);
    let picked: Vec<&str> = state.selected_units(&units).iter().map(|u| u.id.as_str()).collect();
    assert_eq!(picked, ["a", "b"]);
}
