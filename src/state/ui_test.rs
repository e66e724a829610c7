use super::*;
use floorplan::units::UnitId;
use floorplan::viewport::Point;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn default_is_unzoomed_and_idle() {
    let state = UiState::default();
    assert_eq!(state.svg_status, SvgStatus::Idle);
    assert_eq!(state.zoom_label(), "100%");
    assert!(state.zoom_request.is_none());
    assert!(state.svg_error().is_none());
}

// =============================================================
// Zoom requests
// =============================================================

#[test]
fn zoom_requests_get_increasing_sequence_numbers() {
    let mut state = UiState::default();
    state.request_zoom(ZoomCommand::In);
    let (first, _) = state.zoom_request.unwrap();
    state.request_zoom(ZoomCommand::In);
    let (second, command) = state.zoom_request.unwrap();
    assert!(second > first);
    assert_eq!(command, ZoomCommand::In);
}

#[test]
fn zoom_label_rounds() {
    let state = UiState { zoom: 1.25, ..UiState::default() };
    assert_eq!(state.zoom_label(), "125%");
}

// =============================================================
// Reload and reset
// =============================================================

#[test]
fn reload_bumps_sequence() {
    let mut state = UiState::default();
    state.request_reload();
    state.request_reload();
    assert_eq!(state.reload_seq, 2);
}

#[test]
fn reset_for_load_clears_overlays() {
    let mut state = UiState {
        svg_status: SvgStatus::Failed("boom".to_owned()),
        bind_warning: Some(BindWarning::NoneMatched { total: 3 }),
        tooltip: Some(TooltipState { unit_id: UnitId::new("a"), position: Point::new(1.0, 1.0), lines: vec![] }),
        rotated: true,
        ..UiState::default()
    };
    assert_eq!(state.svg_error(), Some("boom"));
    state.reset_for_load();
    assert_eq!(state.svg_status, SvgStatus::Loading);
    assert!(state.bind_warning.is_none());
    assert!(state.tooltip.is_none());
    assert!(!state.rotated);
}
