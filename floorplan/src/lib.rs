//! Interactive floor-plan core for the storage-unit reservation client.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of one floor plan: normalizing backend unit records,
//! validating fetched SVG markup, binding units to SVG shapes despite
//! inconsistent identifier conventions, deriving each shape's visual state from
//! the current selection and filters, and sizing the plan into its container.
//! The Leptos host is responsible only for fetching, scheduling frames, and
//! routing DOM events back into [`controller::FloorPlan`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Load/bind/paint state machine and the DOM-owning host |
//! | [`units`] | Raw and enriched storage-unit records |
//! | [`dimensions`] | Area/label normalization for ambiguous dimension fields |
//! | [`shape_id`] | Identifier variants and SVG element resolution |
//! | [`visual_state`] | Fill and interactivity rules |
//! | [`selection`] | Selected units and active filters |
//! | [`plan`] | Backend plan payload and reservation bookkeeping |
//! | [`svg`] | Markup validation and element-id index |
//! | [`viewport`] | Auto-fit, rotation, and manual zoom |
//! | [`consts`] | Palette, zoom bounds, layout offsets |

pub mod consts;
pub mod controller;
pub mod dimensions;
pub mod plan;
pub mod selection;
pub mod shape_id;
pub mod svg;
pub mod units;
pub mod viewport;
pub mod visual_state;
