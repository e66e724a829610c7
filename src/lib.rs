//! # trasteros
//!
//! Leptos + WASM client for reserving self-storage units ("trasteros") on an
//! interactive floor plan.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and configuration. Everything that touches the injected SVG lives in the
//! `floorplan` crate; the `FloorPlanHost` component is the bridge between
//! Leptos signals and `floorplan::controller::FloorPlan`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
