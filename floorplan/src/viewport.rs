//! Auto-fit sizing, portrait rotation, and manual zoom for the injected plan.
//!
//! Auto-fit and manual zoom are independent: [`fit`] derives a [`Placement`]
//! from the container, and [`Zoom`] is a separate multiplicative factor the
//! user adjusts. The displayed scale is always `placement.scale * zoom`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{ROTATE_BREAKPOINT_PX, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in container-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels or SVG user units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `Some` only when both sides are finite and strictly positive.
    #[must_use]
    pub fn new_positive(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self { width: self.height, height: self.width }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }

    #[must_use]
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

/// How the plan is scaled into its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Match the container width; the container grows to the resulting height.
    #[default]
    Width,
    /// Fit inside both container dimensions, preserving aspect ratio.
    Contain,
}

/// Computed position and scale of the plan inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Scale applied to the natural size.
    pub scale: f64,
    /// Whether the plan is rotated 90° clockwise.
    pub rotated: bool,
    /// Intrinsic size of the SVG, unrotated.
    pub natural: Size,
    /// Bounding box of the displayed plan, after rotation.
    pub display: Size,
    /// Top-left corner of `display` inside the container.
    pub offset: Point,
    container: Size,
    mode: FitMode,
}

impl Placement {
    /// Re-scale by a manual zoom factor, recentering inside the container.
    #[must_use]
    pub fn zoomed(&self, zoom: f64) -> Self {
        let scale = self.scale * zoom;
        let display = oriented(self.natural, self.rotated).scaled(scale);
        Self {
            scale,
            display,
            offset: centered_offset(display, self.container, self.mode),
            ..*self
        }
    }

    /// Size to give the `<svg>` element itself, before the rotation transform.
    #[must_use]
    pub fn element_size(&self) -> Size {
        self.natural.scaled(self.scale)
    }

    /// Height the container must take so the plan is fully visible.
    #[must_use]
    pub fn required_height(&self) -> f64 {
        match self.mode {
            FitMode::Width => self.display.height,
            FitMode::Contain => self.container.height.max(self.display.height),
        }
    }

    /// CSS `transform` for the `<svg>` element, with `transform-origin: 0 0`.
    ///
    /// Rotating 90° about the top-left corner moves the box to negative x, so the
    /// translation adds the rotated width back before applying the centering offset.
    #[must_use]
    pub fn css_transform(&self) -> String {
        if self.rotated {
            let shift_x = self.offset.x + self.display.width;
            format!("translate({:.2}px, {:.2}px) rotate(90deg)", shift_x, self.offset.y)
        } else {
            format!("translate({:.2}px, {:.2}px)", self.offset.x, self.offset.y)
        }
    }
}

fn oriented(natural: Size, rotated: bool) -> Size {
    if rotated { natural.swapped() } else { natural }
}

fn centered_offset(display: Size, container: Size, mode: FitMode) -> Point {
    let x = ((container.width - display.width) / 2.0).max(0.0);
    let y = match mode {
        FitMode::Width => 0.0,
        FitMode::Contain => ((container.height - display.height) / 2.0).max(0.0),
    };
    Point::new(x, y)
}

/// Compute the auto-fit placement of a plan of `natural` size inside `container`.
///
/// When `rotated`, the plan's long axis is mapped to the container's vertical
/// axis, so the natural width is compared against the container height.
#[must_use]
pub fn fit(natural: Size, container: Size, rotated: bool, mode: FitMode) -> Placement {
    let effective = oriented(natural, rotated);
    let width_scale = ratio(container.width, effective.width);
    let scale = match (mode, width_scale) {
        (FitMode::Width, Some(s)) => s,
        (FitMode::Contain, Some(s)) => ratio(container.height, effective.height).map_or(s, |h| s.min(h)),
        (_, None) => 1.0,
    };
    let display = effective.scaled(scale);
    Placement {
        scale,
        rotated,
        natural,
        display,
        offset: centered_offset(display, container, mode),
        container,
        mode,
    }
}

fn ratio(available: f64, natural: f64) -> Option<f64> {
    (available.is_finite() && natural.is_finite() && available > 0.0 && natural > 0.0).then(|| available / natural)
}

/// Rotate a landscape plan when the container is a narrow portrait viewport.
#[must_use]
pub fn should_rotate(container: Size, natural: Size) -> bool {
    container.width < ROTATE_BREAKPOINT_PX && container.is_portrait() && natural.is_landscape()
}

/// Modifier keys that turn a wheel gesture into zoom.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// User-controlled zoom factor, bounded to `[ZOOM_MIN, ZOOM_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    factor: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl Zoom {
    #[must_use]
    pub fn factor(self) -> f64 {
        self.factor
    }

    pub fn set(&mut self, factor: f64) {
        if factor.is_finite() {
            self.factor = factor.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set(self.factor + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set(self.factor - ZOOM_STEP);
    }

    /// Back to pure auto-fit.
    pub fn reset(&mut self) {
        self.factor = 1.0;
    }

    #[must_use]
    pub fn can_zoom_in(self) -> bool {
        self.factor < ZOOM_MAX
    }

    #[must_use]
    pub fn can_zoom_out(self) -> bool {
        self.factor > ZOOM_MIN
    }

    /// Apply a wheel event. Only zooms while Ctrl or Meta is held; returns whether
    /// the event was consumed so the host can suppress page scrolling.
    pub fn on_wheel(&mut self, delta_y: f64, modifiers: Modifiers) -> bool {
        if !(modifiers.ctrl || modifiers.meta) || delta_y == 0.0 {
            return false;
        }
        if delta_y < 0.0 {
            self.zoom_in();
        } else {
            self.zoom_out();
        }
        true
    }
}
