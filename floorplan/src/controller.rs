use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, MouseEvent, SvgElement};

use crate::consts::{TOOLTIP_HEIGHT_PX, TOOLTIP_OFFSET_PX, TOOLTIP_WIDTH_PX};
use crate::selection::SelectionState;
use crate::shape_id::resolve_element;
use crate::svg::SvgDocument;
use crate::units::{StorageUnit, UnitId};
use crate::viewport::{FitMode, Modifiers, Placement, Point, Size, Zoom, fit};
use crate::visual_state::{UnitFill, cursor, fill, is_interactive};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Why a plan load failed. Each message is shown to the user next to a retry button.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("could not reach the floor-plan server: {0}")]
    Network(String),
    #[error("the floor-plan server answered with status {0}")]
    Status(u16),
    /// A 304 is never trusted: the caller cannot tell a stale cache from a fresh one.
    #[error("the floor plan came back as \"not modified\" (304); reload to fetch a fresh copy")]
    NotModified,
    #[error("the floor-plan file is not an SVG image")]
    NotSvg,
    #[error("the floor-plan SVG could not be read: {0}")]
    MalformedSvg(String),
    #[error("the plan data could not be loaded: {0}")]
    Plan(String),
}

/// An operation was called in a phase that does not support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("no floor plan is loaded")]
    NotLoaded,
    #[error("the floor plan has not been injected into the page")]
    NotInjected,
}

/// Lifecycle of one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadFailed(LoadError),
    Bound,
    Painted,
}

/// Identifies one `begin_load` call; results carrying an older ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Identifies one scheduled repaint; only the latest ticket may paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket(u64);

/// Validate an HTTP response carrying SVG markup.
///
/// # Errors
///
/// `304` maps to [`LoadError::NotModified`], any other non-2xx to [`LoadError::Status`],
/// and a body without SVG markup to [`LoadError::NotSvg`] / [`LoadError::MalformedSvg`].
pub fn check_svg_response(status: u16, body: String) -> Result<SvgDocument, LoadError> {
    if status == 304 {
        return Err(LoadError::NotModified);
    }
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    SvgDocument::parse(body)
}

/// Append a cache-busting query parameter.
#[must_use]
pub fn cache_busted_url(url: &str, nonce: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}_ts={nonce}")
}

/// Format a monthly price for labels and tooltips.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0} €/mes")
    } else {
        format!("{price:.2} €/mes")
    }
}

/// Diagnostic raised when units could not be matched to shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindWarning {
    /// Some units have no shape; the rest are fine.
    Partial { missing: Vec<String> },
    /// Not a single unit matched: the plan and the data likely use different identifiers.
    NoneMatched { total: usize },
}

impl BindWarning {
    /// Banner text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Partial { missing } => {
                format!("{} unit(s) are not on the plan: {}", missing.len(), missing.join(", "))
            }
            Self::NoneMatched { total } => {
                format!("None of the {total} units could be located on the plan; the plan may not match this site")
            }
        }
    }
}

/// Result of binding units to shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    pub total: usize,
    pub bound: usize,
    /// Unit numbers without a shape, in unit order.
    pub missing: Vec<String>,
}

impl BindReport {
    #[must_use]
    pub fn warning(&self) -> Option<BindWarning> {
        if self.total > 0 && self.bound == 0 {
            Some(BindWarning::NoneMatched { total: self.total })
        } else if self.missing.is_empty() {
            None
        } else {
            Some(BindWarning::Partial { missing: self.missing.clone() })
        }
    }
}

/// Visual update for one bound shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapePaint {
    pub unit_id: UnitId,
    pub element_id: String,
    pub fill: UnitFill,
    pub interactive: bool,
}

impl ShapePaint {
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        cursor(self.interactive)
    }
}

/// Floating tooltip anchored near the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub unit_id: UnitId,
    pub position: Point,
    pub lines: Vec<String>,
}

/// Core floor-plan state: everything that does not depend on the DOM.
///
/// Separated from [`FloorPlan`] so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct FloorPlanCore {
    phase: Phase,
    load_seq: u64,
    frame_seq: u64,
    svg: Option<SvgDocument>,
    /// Unit → resolved element id, in unit order.
    bindings: Vec<(UnitId, String)>,
    report: Option<BindReport>,
    tooltip: Option<TooltipState>,
    pub zoom: Zoom,
    auto_fit: Option<Placement>,
    measured_size: Option<Size>,
    container: Size,
}

impl FloorPlanCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Loading ---

    /// Start a new load. Unconditionally discards the previous document,
    /// bindings, tooltip, and any pending frame.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.frame_seq += 1;
        self.phase = Phase::Loading;
        self.svg = None;
        self.bindings.clear();
        self.report = None;
        self.tooltip = None;
        self.auto_fit = None;
        self.measured_size = None;
        LoadTicket(self.load_seq)
    }

    #[must_use]
    pub fn is_current_load(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_seq
    }

    /// Apply a fetch result. Returns `false` when the ticket was superseded and the result dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<SvgDocument, LoadError>) -> bool {
        if !self.is_current_load(ticket) {
            log::debug!("discarding superseded plan load #{} (current #{})", ticket.0, self.load_seq);
            return false;
        }
        match result {
            Ok(svg) => {
                self.svg = Some(svg);
                self.phase = Phase::Loaded;
            }
            Err(err) => {
                log::warn!("plan load failed: {err}");
                self.phase = Phase::LoadFailed(err);
            }
        }
        true
    }

    // --- Binding ---

    /// Resolve every unit's shape against the loaded document.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NotLoaded`] if no document is loaded.
    pub fn bind(&mut self, units: &[StorageUnit]) -> Result<&BindReport, ControllerError> {
        let svg = self.svg.as_ref().ok_or(ControllerError::NotLoaded)?;

        let mut bindings: Vec<(UnitId, String)> = Vec::with_capacity(units.len());
        let mut missing = Vec::new();
        for unit in units {
            let resolved = unit
                .shape_id
                .as_deref()
                .and_then(|shape_id| resolve_element(svg, shape_id))
                .map(|(element_id, _tag)| element_id);
            match resolved {
                Some(element_id) if bindings.iter().all(|(_, bound)| bound != &element_id) => {
                    bindings.push((unit.id.clone(), element_id));
                }
                Some(element_id) => {
                    log::warn!("unit {}: shape {element_id} is already bound to another unit", unit.number);
                    missing.push(unit.number.clone());
                }
                None => missing.push(unit.number.clone()),
            }
        }

        let report = BindReport { total: units.len(), bound: bindings.len(), missing };
        match report.warning() {
            Some(BindWarning::NoneMatched { total }) => {
                log::error!("no unit matched a shape on the plan ({total} units, {} ids in svg)", svg.id_count());
            }
            Some(BindWarning::Partial { missing }) => {
                log::warn!("{} unit(s) without a shape: {}", missing.len(), missing.join(", "));
            }
            None => {}
        }

        self.bindings = bindings;
        self.tooltip = None;
        self.phase = Phase::Bound;
        Ok(self.report.insert(report))
    }

    /// Element id bound to `unit_id`, if any.
    #[must_use]
    pub fn element_for(&self, unit_id: &UnitId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(id, _)| id == unit_id)
            .map(|(_, element)| element.as_str())
    }

    #[must_use]
    pub fn bindings(&self) -> &[(UnitId, String)] {
        &self.bindings
    }

    #[must_use]
    pub fn is_bound(&self, unit_id: &UnitId) -> bool {
        self.element_for(unit_id).is_some()
    }

    #[must_use]
    pub fn bind_report(&self) -> Option<&BindReport> {
        self.report.as_ref()
    }

    // --- Painting ---

    /// Schedule a repaint. Any earlier, unfinished ticket becomes stale.
    pub fn request_frame(&mut self) -> FrameTicket {
        self.frame_seq += 1;
        FrameTicket(self.frame_seq)
    }

    #[must_use]
    pub fn is_current_frame(&self, ticket: FrameTicket) -> bool {
        ticket.0 == self.frame_seq
    }

    /// Compute paints for every bound unit from the current external state.
    ///
    /// Returns `None` when the ticket was superseded or nothing is bound yet. The
    /// result depends only on `units` and `selection`, never on a previous paint.
    pub fn paint(
        &mut self,
        ticket: FrameTicket,
        units: &[StorageUnit],
        selection: &SelectionState,
    ) -> Option<Vec<ShapePaint>> {
        if !self.is_current_frame(ticket) {
            log::debug!("discarding superseded frame #{} (current #{})", ticket.0, self.frame_seq);
            return None;
        }
        if !matches!(self.phase, Phase::Bound | Phase::Painted) {
            return None;
        }
        let selected = selection.selected_ids();
        let paints = self
            .bindings
            .iter()
            .filter_map(|(unit_id, element_id)| {
                let unit = units.iter().find(|u| &u.id == unit_id)?;
                Some(ShapePaint {
                    unit_id: unit_id.clone(),
                    element_id: element_id.clone(),
                    fill: fill(unit, &selection.filters, selected),
                    interactive: is_interactive(unit, &selection.filters, selected),
                })
            })
            .collect();
        self.phase = Phase::Painted;
        Some(paints)
    }

    /// Whether a click on `unit_id` should toggle it, judged against current state.
    #[must_use]
    pub fn accepts_click(&self, unit_id: &UnitId, units: &[StorageUnit], selection: &SelectionState) -> bool {
        self.is_bound(unit_id)
            && units
                .iter()
                .find(|u| &u.id == unit_id)
                .is_some_and(|u| is_interactive(u, &selection.filters, selection.selected_ids()))
    }

    // --- Tooltip ---

    /// Track the pointer over `unit_id`. `pointer` is container-local.
    pub fn hover(&mut self, unit_id: &UnitId, pointer: Point, units: &[StorageUnit]) -> Option<&TooltipState> {
        let Some(unit) = units.iter().find(|u| &u.id == unit_id) else {
            self.tooltip = None;
            return None;
        };
        let position = tooltip_position(pointer, self.container);
        let tooltip = TooltipState {
            unit_id: unit.id.clone(),
            position,
            lines: vec![format!("#{}", unit.number), unit.dimensions_label.clone(), format_price(unit.price)],
        };
        Some(self.tooltip.insert(tooltip))
    }

    /// Pointer left the shape.
    pub fn leave(&mut self) {
        self.tooltip = None;
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    // --- Sizing ---

    /// Measured size used when the markup declares no intrinsic size.
    pub fn set_measured_size(&mut self, size: Size) {
        self.measured_size = Size::new_positive(size.width, size.height);
    }

    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.svg.as_ref().and_then(SvgDocument::natural_size).or(self.measured_size)
    }

    #[must_use]
    pub fn needs_measurement(&self) -> bool {
        self.svg.is_some() && self.natural_size().is_none()
    }

    /// Recompute auto-fit for `container`. Returns the displayed (zoomed) placement.
    pub fn fit(&mut self, container: Size, rotated: bool, mode: FitMode) -> Option<Placement> {
        self.container = container;
        let natural = self.natural_size()?;
        self.auto_fit = Some(fit(natural, container, rotated, mode));
        self.placement()
    }

    /// Auto-fit placement scaled by the manual zoom.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.auto_fit.map(|p| p.zoomed(self.zoom.factor()))
    }

    #[must_use]
    pub fn auto_fit(&self) -> Option<Placement> {
        self.auto_fit
    }

    pub fn zoom_in(&mut self) -> Option<Placement> {
        self.zoom.zoom_in();
        self.placement()
    }

    pub fn zoom_out(&mut self) -> Option<Placement> {
        self.zoom.zoom_out();
        self.placement()
    }

    /// Drop manual zoom and return to the auto-fit scale.
    pub fn reset_zoom(&mut self) -> Option<Placement> {
        self.zoom.reset();
        self.placement()
    }

    /// Modifier+wheel zoom. `None` when the event should scroll normally.
    pub fn on_wheel(&mut self, delta_y: f64, modifiers: Modifiers) -> Option<Placement> {
        if self.zoom.on_wheel(delta_y, modifiers) { self.placement() } else { None }
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn svg(&self) -> Option<&SvgDocument> {
        self.svg.as_ref()
    }
}

/// Offset the tooltip from the pointer and keep it inside the container.
fn tooltip_position(pointer: Point, container: Size) -> Point {
    let mut x = pointer.x + TOOLTIP_OFFSET_PX;
    let mut y = pointer.y + TOOLTIP_OFFSET_PX;
    if container.width > 0.0 && x + TOOLTIP_WIDTH_PX > container.width {
        x = (pointer.x - TOOLTIP_OFFSET_PX - TOOLTIP_WIDTH_PX).max(0.0);
    }
    if container.height > 0.0 && y + TOOLTIP_HEIGHT_PX > container.height {
        y = (pointer.y - TOOLTIP_OFFSET_PX - TOOLTIP_HEIGHT_PX).max(0.0);
    }
    Point::new(x, y)
}

/// CSS attribute selector matching an exact `id`, safe for any identifier.
#[must_use]
pub fn id_selector(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[id=\"{escaped}\"]")
}

/// Pointer events routed from bound shapes to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Toggle(UnitId),
    Hover { unit_id: UnitId, pointer: Point },
    Leave,
}

/// Callback receiving [`HostEvent`]s.
pub type EventSink = Rc<dyn Fn(HostEvent)>;

/// The full floor plan. Wraps [`FloorPlanCore`] and exclusively owns the injected SVG.
pub struct FloorPlan {
    container: HtmlElement,
    pub core: FloorPlanCore,
    svg_root: Option<Element>,
    elements: HashMap<UnitId, SvgElement>,
    handlers: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl FloorPlan {
    /// Create a floor plan rendering into `container`.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self {
            container,
            core: FloorPlanCore::new(),
            svg_root: None,
            elements: HashMap::new(),
            handlers: Vec::new(),
        }
    }

    /// Start a new load, clearing the injected markup and every handler.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.container.set_inner_html("");
        self.svg_root = None;
        self.elements.clear();
        self.handlers.clear();
        self.core.begin_load()
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<SvgDocument, LoadError>) -> bool {
        self.core.finish_load(ticket, result)
    }

    /// Structural render: inject the loaded markup into the container once.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NotLoaded`] if no document is loaded.
    pub fn inject(&mut self) -> Result<(), ControllerError> {
        let markup = self.core.svg().ok_or(ControllerError::NotLoaded)?.markup();
        self.container.set_inner_html(markup);
        self.svg_root = match self.container.query_selector("svg") {
            Ok(found) => found,
            Err(e) => {
                log::warn!("svg root lookup failed: {e:?}");
                None
            }
        };
        if let Some(root) = &self.svg_root {
            set_attr(root, "preserveAspectRatio", "xMidYMid meet");
            set_style(root, "transform-origin", "0 0");
            set_style(root, "display", "block");
        }
        Ok(())
    }

    /// Measure the injected SVG when its markup declares no size. Call after layout.
    pub fn measure_if_needed(&mut self) {
        if !self.core.needs_measurement() {
            return;
        }
        if let Some(root) = &self.svg_root {
            let rect = root.get_bounding_client_rect();
            self.core.set_measured_size(Size::new(rect.width(), rect.height()));
        }
    }

    /// Bind units and cache their live elements.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NotInjected`] if [`FloorPlan::inject`] has not run for this load.
    pub fn bind(&mut self, units: &[StorageUnit]) -> Result<BindReport, ControllerError> {
        if self.svg_root.is_none() {
            return Err(ControllerError::NotInjected);
        }
        let report = self.core.bind(units)?.clone();
        self.elements.clear();
        for (unit_id, element_id) in self.core.bindings() {
            match self.container.query_selector(&id_selector(element_id)) {
                Ok(Some(element)) => match element.dyn_into::<SvgElement>() {
                    Ok(svg_element) => {
                        self.elements.insert(unit_id.clone(), svg_element);
                    }
                    Err(_) => log::warn!("shape {element_id} is not an SVG element"),
                },
                Ok(None) => log::warn!("shape {element_id} disappeared after injection"),
                Err(e) => log::warn!("shape lookup for {element_id} failed: {e:?}"),
            }
        }
        Ok(report)
    }

    /// Apply paints and (re)install pointer handlers.
    ///
    /// Handlers are installed through the `on*` properties, so each call replaces
    /// the previous handler reference instead of stacking listeners.
    pub fn apply_paint(&mut self, paints: &[ShapePaint], sink: &EventSink) {
        let mut next: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::with_capacity(paints.len() * 3);
        for paint in paints {
            let Some(element) = self.elements.get(&paint.unit_id) else {
                continue;
            };
            set_style(element, "fill", paint.fill.color());
            set_style(element, "cursor", paint.cursor());
            set_attr(element, "data-unit-state", paint.fill.class_name());

            let click = {
                let sink = Rc::clone(sink);
                let unit_id = paint.unit_id.clone();
                let interactive = paint.interactive;
                Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                    ev.stop_propagation();
                    if interactive {
                        sink(HostEvent::Toggle(unit_id.clone()));
                    }
                })
            };
            let hover = {
                let sink = Rc::clone(sink);
                let unit_id = paint.unit_id.clone();
                let container = self.container.clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                    let rect = container.get_bounding_client_rect();
                    let pointer = Point::new(
                        f64::from(ev.client_x()) - rect.left(),
                        f64::from(ev.client_y()) - rect.top(),
                    );
                    sink(HostEvent::Hover { unit_id: unit_id.clone(), pointer });
                })
            };
            let leave = {
                let sink = Rc::clone(sink);
                Closure::<dyn FnMut(MouseEvent)>::new(move |_ev: MouseEvent| sink(HostEvent::Leave))
            };

            element.set_onclick(Some(click.as_ref().unchecked_ref()));
            element.set_onmousemove(Some(hover.as_ref().unchecked_ref()));
            element.set_onmouseleave(Some(leave.as_ref().unchecked_ref()));
            next.extend([click, hover, leave]);
        }
        // Old closures are dropped only after every element points at its replacement.
        self.handlers = next;
    }

    /// Size and position the injected SVG from the current placement.
    pub fn apply_placement(&self) {
        let (Some(root), Some(placement)) = (&self.svg_root, self.core.placement()) else {
            return;
        };
        let size = placement.element_size();
        set_attr(root, "width", &format!("{:.2}", size.width));
        set_attr(root, "height", &format!("{:.2}", size.height));
        set_style(root, "transform", &placement.css_transform());
        set_style(&self.container, "height", &format!("{:.2}px", placement.required_height()));
    }

    /// Current CSS size of the container.
    #[must_use]
    pub fn container_size(&self) -> Size {
        Size::new(f64::from(self.container.client_width()), f64::from(self.container.client_height()))
    }
}

fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        log::debug!("set_attribute({name}) failed: {e:?}");
    }
}

fn set_style(element: &Element, property: &str, value: &str) {
    let result = if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)
    } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
        svg.style().set_property(property, value)
    } else {
        return;
    };
    if let Err(e) = result {
        log::debug!("style {property} failed: {e:?}");
    }
}
