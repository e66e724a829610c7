//! Shared constants for the floor-plan crate.

// ── Palette ─────────────────────────────────────────────────────

/// Fill for units in the current selection.
pub const FILL_SELECTED: &str = "#2563eb";

/// Fill for occupied, reserved, or maintenance units.
pub const FILL_OCCUPIED: &str = "#ef4444";

/// Fill for available units hidden by an active filter.
pub const FILL_FILTERED_OUT: &str = "#d1d5db";

/// Fill for available units that pass every filter.
pub const FILL_AVAILABLE: &str = "#22c55e";

// ── Dimensions ──────────────────────────────────────────────────

/// Absolute tolerance when comparing a unit's area against a filter bucket.
pub const DIMENSION_EPSILON: f64 = 1e-6;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest manual zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest manual zoom factor.
pub const ZOOM_MAX: f64 = 4.0;

/// Increment applied by zoom buttons and modifier+wheel gestures.
pub const ZOOM_STEP: f64 = 0.25;

// ── Layout ──────────────────────────────────────────────────────

/// Containers narrower than this may rotate a landscape plan to portrait.
pub const ROTATE_BREAKPOINT_PX: f64 = 768.0;

/// Offset from the pointer to the tooltip's top-left corner.
pub const TOOLTIP_OFFSET_PX: f64 = 12.0;

/// Assumed tooltip footprint used to keep it inside the container.
pub const TOOLTIP_WIDTH_PX: f64 = 160.0;
pub const TOOLTIP_HEIGHT_PX: f64 = 64.0;
