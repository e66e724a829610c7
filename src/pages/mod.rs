//! Routed pages.

pub mod plan;
