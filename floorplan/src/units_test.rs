#![allow(clippy::float_cmp)]

use super::*;

fn parse(value: serde_json::Value) -> RawStorageUnit {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn deserializes_camel_case_record() {
    let raw = parse(serde_json::json!({
        "id": "u-12",
        "number": 12,
        "shapeId": "t12",
        "status": "AVAILABLE",
        "type": "Trastero",
        "price": 80,
        "dimensions": "2x1"
    }));
    assert_eq!(raw.id, UnitId::new("u-12"));
    assert_eq!(raw.number.as_deref(), Some("12"));
    assert_eq!(raw.shape_id.as_deref(), Some("t12"));
    assert_eq!(raw.status, UnitStatus::Available);
    assert_eq!(raw.unit_type.as_deref(), Some("Trastero"));
    assert_eq!(raw.price, Some(80.0));
    assert_eq!(raw.dimensions, Some(DimensionField::Text("2x1".to_owned())));
}

#[test]
fn numeric_identifier_becomes_string() {
    let raw = parse(serde_json::json!({ "id": 42 }));
    assert_eq!(raw.id.as_str(), "42");
}

#[test]
fn missing_identifier_is_rejected() {
    let result: Result<RawStorageUnit, _> = serde_json::from_value(serde_json::json!({ "number": 1 }));
    assert!(result.is_err());
}

#[test]
fn shape_id_aliases_are_accepted() {
    let a = parse(serde_json::json!({ "id": 1, "shape_id": "A1" }));
    let b = parse(serde_json::json!({ "id": 1, "svgId": "A1" }));
    assert_eq!(a.shape_id.as_deref(), Some("A1"));
    assert_eq!(b.shape_id.as_deref(), Some("A1"));
}

#[test]
fn numeric_strings_are_parsed_leniently() {
    let raw = parse(serde_json::json!({
        "id": 1,
        "monthlyPrice": "79,90",
        "width": "2",
        "height": "bad",
        "area": null
    }));
    assert_eq!(raw.price, Some(79.9));
    assert_eq!(raw.width, Some(2.0));
    assert_eq!(raw.height, None);
    assert_eq!(raw.area, None);
}

#[test]
fn dimensions_field_keeps_number_or_text() {
    let n = parse(serde_json::json!({ "id": 1, "dimensions": 4.5 }));
    let t = parse(serde_json::json!({ "id": 1, "dimensions": "3" }));
    let other = parse(serde_json::json!({ "id": 1, "dimensions": true }));
    assert_eq!(n.dimensions, Some(DimensionField::Number(4.5)));
    assert_eq!(t.dimensions, Some(DimensionField::Text("3".to_owned())));
    assert_eq!(other.dimensions, None);
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_labels_are_case_insensitive() {
    assert_eq!(UnitStatus::from_label("Available"), UnitStatus::Available);
    assert_eq!(UnitStatus::from_label(" OCCUPIED "), UnitStatus::Occupied);
    assert_eq!(UnitStatus::from_label("reserved"), UnitStatus::Reserved);
    assert_eq!(UnitStatus::from_label("Maintenance"), UnitStatus::Maintenance);
    assert_eq!(UnitStatus::from_label("disponible"), UnitStatus::Available);
}

#[test]
fn unknown_or_missing_status_is_unknown() {
    assert_eq!(UnitStatus::from_label("demolished"), UnitStatus::Unknown);
    assert_eq!(parse(serde_json::json!({ "id": 1 })).status, UnitStatus::Unknown);
    assert_eq!(parse(serde_json::json!({ "id": 1, "status": 3 })).status, UnitStatus::Unknown);
}

// =============================================================
// Enrichment
// =============================================================

#[test]
fn enrich_scenario_unit() {
    let raw = parse(serde_json::json!({
        "id": "u-12",
        "number": 12,
        "shapeId": "t12",
        "status": "AVAILABLE",
        "dimensions": "2x1",
        "price": 80
    }));
    let unit = StorageUnit::enrich(&raw);
    assert_eq!(unit.dimensions, 2.0);
    assert_eq!(unit.dimensions_label, "2x1");
    assert_eq!(unit.number, "12");
    assert_eq!(unit.price, 80.0);
    assert!(unit.is_available());
}

#[test]
fn enrich_is_deterministic() {
    let raw = parse(serde_json::json!({ "id": 1, "width": 2, "height": 3 }));
    assert_eq!(StorageUnit::enrich(&raw), StorageUnit::enrich(&raw));
}

#[test]
fn enrich_without_number_uses_id() {
    let unit = StorageUnit::enrich(&RawStorageUnit::new("abc"));
    assert_eq!(unit.number, "abc");
    assert_eq!(unit.dimensions, 0.0);
    assert!(!unit.has_dimensions());
    assert_eq!(unit.price, 0.0);
}

#[test]
fn mark_reserved_changes_only_status() {
    let raw = parse(serde_json::json!({ "id": 1, "status": "available", "area": 3 }));
    let mut unit = StorageUnit::enrich(&raw);
    let before = unit.clone();
    unit.mark_reserved();
    assert_eq!(unit.status, UnitStatus::Reserved);
    assert_eq!(unit.dimensions, before.dimensions);
    assert_eq!(unit.id, before.id);
}
