//! UI components for the floor plan page.

pub mod bind_banner;
pub mod filter_bar;
pub mod floor_plan_host;
pub mod load_error;
pub mod reservation_form;
pub mod selection_panel;
pub mod unit_list;
pub mod zoom_controls;
