use super::*;
use floorplan::units::{RawStorageUnit, UnitId};

use crate::net::types::PaymentMethod;

fn unit(id: &str) -> StorageUnit {
    StorageUnit::enrich(&RawStorageUnit::new(id))
}

// =============================================================
// rejection_message
// =============================================================

#[test]
fn backend_message_wins() {
    assert_eq!(rejection_message(409, Some("reserved by another customer".to_owned())), "reserved by another customer");
}

#[test]
fn conflict_without_message_explains_availability() {
    assert_eq!(rejection_message(409, None), "the unit is no longer available");
}

#[test]
fn validation_status_without_message() {
    assert_eq!(rejection_message(422, None), "the reservation details were rejected");
    assert_eq!(rejection_message(400, None), "the reservation details were rejected");
}

#[test]
fn other_status_is_reported_verbatim() {
    assert_eq!(rejection_message(503, None), "the server answered with status 503");
}

// =============================================================
// ReservationTemplate
// =============================================================

#[test]
fn request_for_varies_only_unit_id() {
    let template = ReservationTemplate {
        customer: Customer { full_name: "Ana".to_owned(), ..Customer::default() },
        contract: Contract::default(),
        payment: Payment { method: PaymentMethod::Transfer, iban: None },
    };
    let a = template.request_for(&unit("a"));
    let b = template.request_for(&unit("b"));
    assert_eq!(a.unit_id, UnitId::new("a"));
    assert_eq!(b.unit_id, UnitId::new("b"));
    assert_eq!(a.customer, b.customer);
    assert_eq!(a.payment.method, PaymentMethod::Transfer);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn plan_errors_convert() {
    let err: ApiError = PlanError::MissingImage.into();
    assert!(matches!(err, ApiError::Plan(PlanError::MissingImage)));
    assert!(err.to_string().starts_with("the plan for this site is invalid"));
}

#[test]
fn status_error_mentions_code() {
    assert!(ApiError::Status(500).to_string().contains("500"));
}
