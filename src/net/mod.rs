//! Network layer: REST helpers and the reservation wire types.

pub mod api;
pub mod types;
