//! Reservation wire DTOs for the backend reservation endpoint.
//!
//! DESIGN
//! ======
//! One request reserves one unit. The customer, contract, and payment blocks
//! are identical across a batch; only `unit_id` varies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use floorplan::units::UnitId;

/// Body of `POST /api/tenants/{tenant}/reservations`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub unit_id: UnitId,
    pub customer: Customer,
    pub contract: Contract,
    pub payment: Payment,
}

/// The person renting the unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// DNI/NIE or passport number.
    pub document_id: String,
}

/// Rental terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// First day of the rental, `YYYY-MM-DD`.
    pub start_date: String,
    pub duration_months: u32,
    pub insurance: bool,
}

impl Default for Contract {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            duration_months: 1,
            insurance: false,
        }
    }
}

/// How the customer pays the monthly fee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Transfer,
    DirectDebit,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Card, Self::Transfer, Self::DirectDebit];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Transfer => "Bank transfer",
            Self::DirectDebit => "Direct debit",
        }
    }

    /// Stable form value for `<select>` options.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Transfer => "transfer",
            Self::DirectDebit => "direct_debit",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }

    /// Whether the method needs a bank account number.
    #[must_use]
    pub fn needs_iban(self) -> bool {
        self == Self::DirectDebit
    }
}

/// Payment block of a reservation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// Error body returned by the backend on a rejected request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Most specific message the backend gave, if any.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}
