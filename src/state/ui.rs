#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use floorplan::controller::{BindWarning, TooltipState};

/// Progress of the SVG fetch and injection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SvgStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Manual zoom request from the zoom controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

/// Floor-plan presentation state published by the host and read by overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub svg_status: SvgStatus,
    pub bind_warning: Option<BindWarning>,
    pub tooltip: Option<TooltipState>,
    /// Current manual zoom factor (1.0 = auto-fit).
    pub zoom: f64,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub rotated: bool,
    /// Latest zoom request; the host applies each sequence number once.
    pub zoom_request: Option<(u64, ZoomCommand)>,
    zoom_seq: u64,
    /// Bumped by retry buttons; the plan page refetches on change.
    pub reload_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            svg_status: SvgStatus::Idle,
            bind_warning: None,
            tooltip: None,
            zoom: 1.0,
            can_zoom_in: true,
            can_zoom_out: true,
            rotated: false,
            zoom_request: None,
            zoom_seq: 0,
            reload_seq: 0,
        }
    }
}

impl UiState {
    /// Queue a zoom command for the host.
    pub fn request_zoom(&mut self, command: ZoomCommand) {
        self.zoom_seq += 1;
        self.zoom_request = Some((self.zoom_seq, command));
    }

    /// Ask the page to fetch the plan again.
    pub fn request_reload(&mut self) {
        self.reload_seq += 1;
    }

    /// Clear per-plan state ahead of a new load. Zoom requests already applied stay consumed.
    pub fn reset_for_load(&mut self) {
        self.svg_status = SvgStatus::Loading;
        self.bind_warning = None;
        self.tooltip = None;
        self.rotated = false;
    }

    /// Zoom label for the controls, e.g. `"125%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{:.0}%", self.zoom * 100.0)
    }

    #[must_use]
    pub fn svg_error(&self) -> Option<&str> {
        match &self.svg_status {
            SvgStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
