//! Multi-step reservation form state.
//!
//! DESIGN
//! ======
//! The form collects one customer/contract/payment block for the whole
//! selection. Each step is validated before moving forward; submission
//! re-validates every step so a skipped check can never reach the backend.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use floorplan::plan::ReservationOutcome;

use crate::net::api::ReservationTemplate;
use crate::net::types::{Contract, Customer, Payment};

/// Longest contract the form accepts, in months.
pub const MAX_DURATION_MONTHS: u32 = 36;

/// Where the user is in the reservation flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Closed,
    Customer,
    Contract,
    Payment,
    Submitting,
    Done,
}

impl Step {
    /// 1-based position among the three input steps.
    #[must_use]
    pub fn number(self) -> Option<usize> {
        match self {
            Self::Customer => Some(1),
            Self::Contract => Some(2),
            Self::Payment => Some(3),
            _ => None,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Customer => "Your details",
            Self::Contract => "Contract",
            Self::Payment => "Payment",
            Self::Submitting => "Reserving…",
            Self::Done => "Result",
            Self::Closed => "",
        }
    }
}

/// A field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Reservation form contents and progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationState {
    pub step: Step,
    pub customer: Customer,
    pub contract: Contract,
    pub payment: Payment,
    /// Raw IBAN as typed; normalized on submission.
    pub iban_input: String,
    pub errors: Vec<FieldError>,
    pub outcome: Option<ReservationOutcome>,
}

impl ReservationState {
    pub fn open(&mut self) {
        self.step = Step::Customer;
        self.errors.clear();
        self.outcome = None;
    }

    /// Close the form, keeping typed details for a later attempt.
    pub fn close(&mut self) {
        self.step = Step::Closed;
        self.errors.clear();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.step != Step::Closed
    }

    /// Validate the current step and advance. Returns `false` if validation failed.
    pub fn next(&mut self) -> bool {
        self.errors = self.validate(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        self.step = match self.step {
            Step::Customer => Step::Contract,
            Step::Contract | Step::Payment => Step::Payment,
            other => other,
        };
        true
    }

    pub fn back(&mut self) {
        self.errors.clear();
        self.step = match self.step {
            Step::Contract => Step::Customer,
            Step::Payment => Step::Contract,
            other => other,
        };
    }

    /// Validate every step and move to `Submitting`.
    ///
    /// Returns the request template, or `None` with `errors` set and the form
    /// moved back to the first invalid step.
    pub fn begin_submit(&mut self) -> Option<ReservationTemplate> {
        if self.step == Step::Submitting {
            return None;
        }
        for step in [Step::Customer, Step::Contract, Step::Payment] {
            let errors = self.validate(step);
            if !errors.is_empty() {
                self.errors = errors;
                self.step = step;
                return None;
            }
        }
        self.errors.clear();
        self.step = Step::Submitting;
        let iban = self.payment.method.needs_iban().then(|| normalize_iban(&self.iban_input));
        Some(ReservationTemplate {
            customer: trimmed_customer(&self.customer),
            contract: self.contract.clone(),
            payment: Payment { method: self.payment.method, iban },
        })
    }

    pub fn finish_submit(&mut self, outcome: ReservationOutcome) {
        self.step = Step::Done;
        self.outcome = Some(outcome);
    }

    /// Errors for `field` in the current step.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// Validation errors for `step`, empty when valid.
    #[must_use]
    pub fn validate(&self, step: Step) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            Step::Customer => {
                let c = &self.customer;
                if c.full_name.trim().is_empty() {
                    errors.push(FieldError::new("full_name", "Enter your full name."));
                }
                if !is_valid_email(&c.email) {
                    errors.push(FieldError::new("email", "Enter a valid email address."));
                }
                if c.phone.chars().filter(char::is_ascii_digit).count() < 9 {
                    errors.push(FieldError::new("phone", "Enter a phone number with at least 9 digits."));
                }
                if c.document_id.trim().is_empty() {
                    errors.push(FieldError::new("document_id", "Enter your ID document number."));
                }
            }
            Step::Contract => {
                if !is_valid_date(&self.contract.start_date) {
                    errors.push(FieldError::new("start_date", "Choose a start date."));
                }
                if !(1..=MAX_DURATION_MONTHS).contains(&self.contract.duration_months) {
                    errors.push(FieldError::new("duration_months", "Duration must be between 1 and 36 months."));
                }
            }
            Step::Payment => {
                if self.payment.method.needs_iban() && !is_valid_iban(&self.iban_input) {
                    errors.push(FieldError::new("iban", "Enter a valid IBAN."));
                }
            }
            Step::Closed | Step::Submitting | Step::Done => {}
        }
        errors
    }
}

fn trimmed_customer(customer: &Customer) -> Customer {
    Customer {
        full_name: customer.full_name.trim().to_owned(),
        email: customer.email.trim().to_owned(),
        phone: customer.phone.trim().to_owned(),
        document_id: customer.document_id.trim().to_ascii_uppercase(),
    }
}

fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.starts_with('.') && domain.contains('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// `YYYY-MM-DD` as produced by `<input type="date">`.
fn is_valid_date(date: &str) -> bool {
    let parts: Vec<&str> = date.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return false;
    }
    match (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(_), Ok(m), Ok(d)) => (1..=12).contains(&m) && (1..=31).contains(&d),
        _ => false,
    }
}

/// Uppercase with whitespace removed.
#[must_use]
pub fn normalize_iban(iban: &str) -> String {
    iban.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_uppercase()
}

/// Length, country prefix, and ISO 7064 mod-97 checksum.
#[must_use]
pub fn is_valid_iban(iban: &str) -> bool {
    let iban = normalize_iban(iban);
    if !(15..=34).contains(&iban.len()) || !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    let (head, tail) = iban.split_at(4);
    if !head[..2].chars().all(|c| c.is_ascii_alphabetic()) || !head[2..].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut remainder: u32 = 0;
    for c in tail.chars().chain(head.chars()) {
        let Some(value) = c.to_digit(36) else {
            return false;
        };
        remainder = if value >= 10 { (remainder * 100 + value) % 97 } else { (remainder * 10 + value) % 97 };
    }
    remainder == 1
}

/// One-line summary of a finished batch.
#[must_use]
pub fn outcome_summary(outcome: &ReservationOutcome) -> String {
    let reserved = outcome.succeeded.len();
    if outcome.is_complete_success() {
        return format!("Reserved {reserved} unit(s).");
    }
    format!(
        "Reserved {reserved} unit(s). Could not reserve: {}.",
        outcome.failed_numbers().join(", ")
    )
}
