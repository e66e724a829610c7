#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::units::UnitStatus;

fn unit(id: &str, number: &str, dimensions: f64, price: f64) -> StorageUnit {
    StorageUnit {
        id: UnitId::new(id),
        number: number.to_owned(),
        shape_id: None,
        status: UnitStatus::Available,
        unit_type: None,
        price,
        dimensions,
        dimensions_label: String::new(),
    }
}

// =============================================================
// parse_plan
// =============================================================

#[test]
fn parses_and_enriches_units() {
    let payload = json!({
        "planImage": "/plans/acme.svg",
        "units": [
            { "id": "u-12", "number": 12, "shapeId": "t12", "status": "AVAILABLE", "dimensions": "2x1", "price": 80 },
            { "id": "u-13", "number": 13, "shapeId": "t13", "status": "occupied", "area": 4, "price": 120 }
        ]
    });
    let plan = parse_plan(&payload, "https://api.example.com/").unwrap();
    assert_eq!(plan.image_url, "https://api.example.com/plans/acme.svg");
    assert_eq!(plan.units.len(), 2);
    assert_eq!(plan.units[0].dimensions, 2.0);
    assert_eq!(plan.units[0].dimensions_label, "2x1");
    assert_eq!(plan.units[1].dimensions_label, "4 m²");
    assert_eq!(plan.units[1].status, UnitStatus::Occupied);
}

#[test]
fn empty_unit_list_is_valid() {
    let plan = parse_plan(&json!({ "image": "https://cdn/x.svg", "units": [] }), "").unwrap();
    assert!(plan.units.is_empty());
    assert_eq!(plan.image_url, "https://cdn/x.svg");
}

#[test]
fn alternate_keys_are_accepted() {
    let plan = parse_plan(&json!({ "svgUrl": "a.svg", "storageUnits": [{ "id": 1 }] }), "").unwrap();
    assert_eq!(plan.image_url, "/a.svg");
    assert_eq!(plan.units.len(), 1);
}

#[test]
fn missing_or_blank_image_is_an_error() {
    assert_eq!(parse_plan(&json!({ "units": [] }), ""), Err(PlanError::MissingImage));
    assert_eq!(parse_plan(&json!({ "image": "  ", "units": [] }), ""), Err(PlanError::MissingImage));
    assert_eq!(parse_plan(&json!({ "image": 5, "units": [] }), ""), Err(PlanError::MissingImage));
}

#[test]
fn non_array_units_is_an_error() {
    assert_eq!(parse_plan(&json!({ "image": "a.svg" }), ""), Err(PlanError::UnitsNotArray));
    assert_eq!(parse_plan(&json!({ "image": "a.svg", "units": {} }), ""), Err(PlanError::UnitsNotArray));
}

#[test]
fn non_object_payload_is_an_error() {
    assert_eq!(parse_plan(&json!([1, 2]), ""), Err(PlanError::NotAnObject));
}

#[test]
fn malformed_unit_entries_are_skipped() {
    let payload = json!({ "image": "a.svg", "units": [{ "id": 1 }, "junk", { "number": 3 }] });
    let plan = parse_plan(&payload, "").unwrap();
    assert_eq!(plan.units.len(), 1);
}

// =============================================================
// resolve_image_url
// =============================================================

#[test]
fn absolute_references_are_kept() {
    assert_eq!(resolve_image_url("https://cdn.x/p.svg", "https://api"), "https://cdn.x/p.svg");
    assert_eq!(resolve_image_url("//cdn.x/p.svg", "https://api"), "//cdn.x/p.svg");
}

#[test]
fn relative_references_join_base_without_double_slash() {
    assert_eq!(resolve_image_url("/p.svg", "https://api/"), "https://api/p.svg");
    assert_eq!(resolve_image_url("plans/p.svg", "https://api"), "https://api/plans/p.svg");
    assert_eq!(resolve_image_url("p.svg", ""), "/p.svg");
}

// =============================================================
// Buckets and bounds
// =============================================================

#[test]
fn buckets_are_distinct_sorted_and_positive() {
    let units = vec![
        unit("a", "1", 4.0, 10.0),
        unit("b", "2", 2.0, 10.0),
        unit("c", "3", 0.0, 10.0),
        unit("d", "4", 4.0, 10.0),
        unit("e", "5", 0.1 * 3.0, 10.0),
        unit("f", "6", 0.3, 10.0),
    ];
    let buckets = dimension_buckets(&units);
    assert_eq!(buckets.len(), 3);
    assert!((buckets[0] - 0.3).abs() < 1e-9);
    assert_eq!(buckets[1], 2.0);
    assert_eq!(buckets[2], 4.0);
}

#[test]
fn price_bounds_spans_all_units() {
    let units = vec![unit("a", "1", 1.0, 50.0), unit("b", "2", 1.0, 20.0), unit("c", "3", 1.0, 90.0)];
    assert_eq!(price_bounds(&units), Some((20.0, 90.0)));
    assert_eq!(price_bounds(&[]), None);
}

// =============================================================
// Reservation outcome
// =============================================================

#[test]
fn partial_batch_failure_reserves_only_successes() {
    let mut units = vec![unit("a", "1", 2.0, 10.0), unit("b", "2", 2.0, 10.0), unit("c", "3", 2.0, 10.0)];
    let mut selection = SelectionState::new();
    for u in &units {
        selection.toggle(&u.id);
    }

    let mut outcome = ReservationOutcome::default();
    outcome.record(&units[0], Ok(()));
    outcome.record(&units[1], Err("unit no longer available".to_owned()));
    outcome.record(&units[2], Ok(()));

    let changed = apply_reservation_outcome(&mut units, &mut selection, &outcome);
    assert_eq!(changed, 2);
    let reserved = units.iter().filter(|u| u.status == UnitStatus::Reserved).count();
    assert_eq!(reserved, 2);
    assert_eq!(units[1].status, UnitStatus::Available);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed_numbers(), ["2"]);
    assert!(!outcome.is_complete_success());
    assert_eq!(selection.selected_ids(), [UnitId::new("b")]);
}

#[test]
fn empty_outcome_changes_nothing() {
    let mut units = vec![unit("a", "1", 2.0, 10.0)];
    let mut selection = SelectionState::new();
    let outcome = ReservationOutcome::default();
    assert_eq!(apply_reservation_outcome(&mut units, &mut selection, &outcome), 0);
    assert!(outcome.is_complete_success());
}
