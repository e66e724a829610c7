//! Small helpers shared by components: frame scheduling and display formatting.

pub mod format;
pub mod frame;
