//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`plan`, `ui`, `reservation`) and provided as
//! `RwSignal` contexts from `App`, so components depend on small focused models.

pub mod plan;
pub mod reservation;
pub mod ui;
