//! REST helpers for the plan, SVG, and reservation endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning errors, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Plan and SVG loads return typed errors whose `Display` is shown next to a
//! retry button. Reservation submission never fails as a whole: each unit's
//! result is recorded in a `ReservationOutcome`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use floorplan::controller::LoadError;
use floorplan::plan::{LoadedPlan, PlanError, ReservationOutcome};
use floorplan::svg::SvgDocument;
use floorplan::units::StorageUnit;

use super::types::{Contract, Customer, Payment, ReservationRequest};

/// Why the plan endpoint could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("the server answered with status {0}")]
    Status(u16),
    #[error("the server response could not be read: {0}")]
    Decode(String),
    #[error("the plan for this site is invalid: {0}")]
    Plan(#[from] PlanError),
}

/// Customer, contract, and payment details shared by every unit in a batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationTemplate {
    pub customer: Customer,
    pub contract: Contract,
    pub payment: Payment,
}

impl ReservationTemplate {
    /// Request body for one unit.
    #[must_use]
    pub fn request_for(&self, unit: &StorageUnit) -> ReservationRequest {
        ReservationRequest {
            unit_id: unit.id.clone(),
            customer: self.customer.clone(),
            contract: self.contract.clone(),
            payment: self.payment.clone(),
        }
    }
}

/// User-facing message for a rejected reservation.
#[cfg(any(test, feature = "csr"))]
fn rejection_message(status: u16, backend_message: Option<String>) -> String {
    match (status, backend_message) {
        (_, Some(message)) => message,
        (409, None) => "the unit is no longer available".to_owned(),
        (400 | 422, None) => "the reservation details were rejected".to_owned(),
        (status, None) => format!("the server answered with status {status}"),
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cache_nonce() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Fetch and validate the plan for `tenant` from `GET /api/tenants/{tenant}/plan`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-success status, an
/// unreadable body, or a payload without an image or unit list.
pub async fn fetch_plan(tenant: &str) -> Result<LoadedPlan, ApiError> {
    #[cfg(feature = "csr")]
    {
        let base = crate::config::api_base();
        let url = crate::config::api_url(base, &crate::config::plan_path(tenant));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let payload: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(floorplan::plan::parse_plan(&payload, base)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = tenant;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch SVG markup, bypassing every cache layer.
///
/// # Errors
///
/// Returns a [`LoadError`]; a `304` is reported as [`LoadError::NotModified`].
pub async fn fetch_svg(url: &str) -> Result<SvgDocument, LoadError> {
    #[cfg(feature = "csr")]
    {
        let busted = floorplan::controller::cache_busted_url(url, cache_nonce());
        let resp = gloo_net::http::Request::get(&busted)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
        floorplan::controller::check_svg_response(status, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(LoadError::Network("not available outside the browser".to_owned()))
    }
}

/// Reserve each unit with its own request, one after another.
///
/// Every unit is attempted; a failure never stops the batch.
pub async fn submit_reservations(tenant: &str, units: Vec<StorageUnit>, template: ReservationTemplate) -> ReservationOutcome {
    let mut outcome = ReservationOutcome::default();
    for unit in &units {
        let result = submit_one(tenant, &template.request_for(unit)).await;
        outcome.record(unit, result);
    }
    outcome
}

async fn submit_one(tenant: &str, request: &ReservationRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::api_url(crate::config::api_base(), &crate::config::reservations_path(tenant));
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| format!("could not reach the server: {e}"))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let backend_message = match resp.json::<super::types::ErrorBody>().await {
            Ok(body) => body.into_message(),
            Err(e) => {
                log::debug!("reservation error body unreadable: {e}");
                None
            }
        };
        Err(rejection_message(status, backend_message))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (tenant, request);
        Err("not available outside the browser".to_owned())
    }
}
