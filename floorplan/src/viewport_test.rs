#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Size ---

#[test]
fn size_new_positive_rejects_degenerate() {
    assert!(Size::new_positive(10.0, 5.0).is_some());
    assert!(Size::new_positive(0.0, 5.0).is_none());
    assert!(Size::new_positive(10.0, f64::NAN).is_none());
}

#[test]
fn size_orientation() {
    assert!(Size::new(200.0, 100.0).is_landscape());
    assert!(Size::new(100.0, 200.0).is_portrait());
    assert_eq!(Size::new(1.0, 2.0).swapped(), Size::new(2.0, 1.0));
}

// --- fit: width mode ---

#[test]
fn width_mode_matches_container_width() {
    let p = fit(Size::new(1000.0, 500.0), Size::new(800.0, 300.0), false, FitMode::Width);
    assert!(approx_eq(p.scale, 0.8));
    assert!(approx_eq(p.display.width, 800.0));
    assert!(approx_eq(p.display.height, 400.0));
    assert!(approx_eq(p.required_height(), 400.0));
    assert_eq!(p.offset, Point::new(0.0, 0.0));
}

#[test]
fn width_mode_height_may_exceed_container() {
    let p = fit(Size::new(100.0, 400.0), Size::new(200.0, 300.0), false, FitMode::Width);
    assert!(approx_eq(p.display.height, 800.0));
    assert!(p.required_height() > 300.0);
}

// --- fit: contain mode ---

#[test]
fn contain_mode_limited_by_height() {
    let p = fit(Size::new(1000.0, 500.0), Size::new(800.0, 200.0), false, FitMode::Contain);
    assert!(approx_eq(p.scale, 0.4));
    assert!(approx_eq(p.display.width, 400.0));
    assert!(approx_eq(p.display.height, 200.0));
    assert!(approx_eq(p.offset.x, 200.0));
    assert!(approx_eq(p.offset.y, 0.0));
}

#[test]
fn contain_mode_never_exceeds_container() {
    let container = Size::new(640.0, 480.0);
    for natural in [Size::new(100.0, 900.0), Size::new(3000.0, 100.0), Size::new(640.0, 480.0)] {
        let p = fit(natural, container, false, FitMode::Contain);
        assert!(p.display.width <= container.width + EPSILON);
        assert!(p.display.height <= container.height + EPSILON);
    }
}

// --- fit: rotation ---

#[test]
fn rotated_maps_long_axis_to_container_height() {
    // 1000x500 landscape plan into a 300x800 portrait container.
    let p = fit(Size::new(1000.0, 500.0), Size::new(300.0, 800.0), true, FitMode::Contain);
    // Effective size is 500x1000; limited by width 300/500 = 0.6 vs 800/1000 = 0.8.
    assert!(approx_eq(p.scale, 0.6));
    assert!(approx_eq(p.display.width, 300.0));
    assert!(approx_eq(p.display.height, 600.0));
    assert!(approx_eq(p.offset.y, 100.0));
    assert!(approx_eq(p.element_size().width, 600.0));
    assert!(approx_eq(p.element_size().height, 300.0));
}

#[test]
fn rotated_transform_shifts_by_rotated_width() {
    let p = fit(Size::new(1000.0, 500.0), Size::new(300.0, 800.0), true, FitMode::Contain);
    assert_eq!(p.css_transform(), "translate(300.00px, 100.00px) rotate(90deg)");
}

#[test]
fn unrotated_transform_is_plain_translate() {
    let p = fit(Size::new(400.0, 200.0), Size::new(800.0, 200.0), false, FitMode::Contain);
    assert_eq!(p.css_transform(), "translate(200.00px, 0.00px)");
}

#[test]
fn degenerate_container_keeps_unit_scale() {
    let p = fit(Size::new(100.0, 100.0), Size::new(0.0, 0.0), false, FitMode::Width);
    assert_eq!(p.scale, 1.0);
}

// --- zoomed placement ---

#[test]
fn zoom_multiplies_auto_fit_scale() {
    let p = fit(Size::new(1000.0, 500.0), Size::new(500.0, 500.0), false, FitMode::Contain);
    let z = p.zoomed(2.0);
    assert!(approx_eq(z.scale, 1.0));
    assert!(approx_eq(z.display.width, 1000.0));
    assert_eq!(z.offset, Point::new(0.0, 0.0));
    // The auto-fit placement itself is unchanged.
    assert!(approx_eq(p.scale, 0.5));
}

// --- should_rotate ---

#[test]
fn rotates_landscape_plan_on_narrow_portrait_container() {
    assert!(should_rotate(Size::new(375.0, 700.0), Size::new(1200.0, 600.0)));
}

#[test]
fn no_rotation_on_wide_or_landscape_containers() {
    assert!(!should_rotate(Size::new(1024.0, 1400.0), Size::new(1200.0, 600.0)));
    assert!(!should_rotate(Size::new(700.0, 375.0), Size::new(1200.0, 600.0)));
    assert!(!should_rotate(Size::new(375.0, 700.0), Size::new(600.0, 1200.0)));
}

// --- Zoom ---

#[test]
fn zoom_defaults_to_one() {
    assert_eq!(Zoom::default().factor(), 1.0);
}

#[test]
fn zoom_steps_are_bounded() {
    let mut zoom = Zoom::default();
    for _ in 0..100 {
        zoom.zoom_in();
    }
    assert_eq!(zoom.factor(), ZOOM_MAX);
    assert!(!zoom.can_zoom_in());
    for _ in 0..100 {
        zoom.zoom_out();
    }
    assert_eq!(zoom.factor(), ZOOM_MIN);
    assert!(!zoom.can_zoom_out());
}

#[test]
fn zoom_reset_restores_auto_fit() {
    let mut zoom = Zoom::default();
    zoom.zoom_in();
    zoom.reset();
    assert_eq!(zoom.factor(), 1.0);
}

#[test]
fn zoom_set_ignores_non_finite() {
    let mut zoom = Zoom::default();
    zoom.set(f64::NAN);
    assert_eq!(zoom.factor(), 1.0);
    zoom.set(100.0);
    assert_eq!(zoom.factor(), ZOOM_MAX);
}

#[test]
fn wheel_requires_modifier() {
    let mut zoom = Zoom::default();
    assert!(!zoom.on_wheel(-100.0, Modifiers::default()));
    assert_eq!(zoom.factor(), 1.0);

    let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
    assert!(zoom.on_wheel(-100.0, ctrl));
    assert_eq!(zoom.factor(), 1.0 + ZOOM_STEP);

    let meta = Modifiers { meta: true, ..Modifiers::default() };
    assert!(zoom.on_wheel(50.0, meta));
    assert_eq!(zoom.factor(), 1.0);
}
