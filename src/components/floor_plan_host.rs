//! Bridge component between Leptos state and the imperative `floorplan::controller::FloorPlan`.
//!
//! ARCHITECTURE
//! ============
//! Leptos renders the container `<div>` exactly once and never touches its
//! children. The `FloorPlan` owns everything inside it: injected markup,
//! element styles, and pointer handlers. This component only sequences the
//! work:
//!
//! 1. image URL changes -> fetch SVG (cache-busted) -> inject markup
//! 2. next frame -> measure, bind units, fit to the container
//! 3. any plan-state change -> request a frame -> paint from current state
//!
//! Shape events flow back through an `EventSink` into `PlanState` / `UiState`.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::{Rc, Weak};

#[cfg(feature = "csr")]
use floorplan::controller::{EventSink, FloorPlan, HostEvent, LoadError, LoadTicket, Phase};
#[cfg(feature = "csr")]
use floorplan::svg::SvgDocument;
#[cfg(feature = "csr")]
use floorplan::units::UnitId;
#[cfg(feature = "csr")]
use floorplan::viewport::{FitMode, Modifiers, Placement, Size, should_rotate};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::plan::PlanState;
#[cfg(feature = "csr")]
use crate::state::ui::ZoomCommand;
use crate::state::ui::{SvgStatus, UiState};
use crate::util::format::tooltip_style;
#[cfg(feature = "csr")]
use crate::util::frame::{next_frame, viewport_height};

#[cfg(feature = "csr")]
type SharedPlan = Rc<RefCell<Option<FloorPlan>>>;

/// Recompute auto-fit for the current container width and viewport height.
#[cfg(feature = "csr")]
fn refit(host: &mut FloorPlan) -> Option<Placement> {
    let container = host.container_size();
    let natural = host.core.natural_size()?;
    let viewport = Size::new(container.width, viewport_height().unwrap_or(container.height));
    let rotated = should_rotate(viewport, natural);
    host.core.fit(viewport, rotated, FitMode::Width)
}

/// Publish zoom and rotation so the controls can render them.
#[cfg(feature = "csr")]
fn publish_view(host: &FloorPlan, ui: RwSignal<UiState>) {
    let zoom = host.core.zoom;
    let rotated = host.core.placement().is_some_and(|p| p.rotated);
    ui.update(|u| {
        u.zoom = zoom.factor();
        u.can_zoom_in = zoom.can_zoom_in();
        u.can_zoom_out = zoom.can_zoom_out();
        u.rotated = rotated;
    });
}

/// Schedule a repaint; only the most recently requested frame applies.
#[cfg(feature = "csr")]
fn schedule_paint(shared: &SharedPlan, plan: RwSignal<PlanState>, sink: &EventSink) {
    let Some(ticket) = shared.borrow_mut().as_mut().map(|h| h.core.request_frame()) else {
        return;
    };
    let shared = Rc::clone(shared);
    let sink = Rc::clone(sink);
    next_frame(move || {
        let mut guard = shared.borrow_mut();
        let Some(host) = guard.as_mut() else {
            return;
        };
        let paints = plan.with_untracked(|p| host.core.paint(ticket, &p.units, &p.selection));
        if let Some(paints) = paints {
            host.apply_paint(&paints, &sink);
        }
    });
}

/// Apply a finished SVG fetch: inject on success, then bind on the next frame.
#[cfg(feature = "csr")]
fn on_svg_loaded(
    shared: &SharedPlan,
    plan: RwSignal<PlanState>,
    ui: RwSignal<UiState>,
    ticket: LoadTicket,
    result: Result<SvgDocument, LoadError>,
) {
    {
        let mut guard = shared.borrow_mut();
        let Some(host) = guard.as_mut() else {
            return;
        };
        if !host.finish_load(ticket, result) {
            return;
        }
        if let Phase::LoadFailed(err) = host.core.phase() {
            let message = err.to_string();
            ui.update(|u| u.svg_status = SvgStatus::Failed(message));
            return;
        }
        if let Err(e) = host.inject() {
            log::warn!("plan injection failed: {e}");
            return;
        }
    }

    let shared = Rc::clone(shared);
    next_frame(move || bind_after_layout(&shared, plan, ui, ticket));
}

/// Measure, bind, and fit once the injected markup has been laid out.
#[cfg(feature = "csr")]
fn bind_after_layout(shared: &SharedPlan, plan: RwSignal<PlanState>, ui: RwSignal<UiState>, ticket: LoadTicket) {
    let bound: Vec<UnitId> = {
        let mut guard = shared.borrow_mut();
        let Some(host) = guard.as_mut() else {
            return;
        };
        if !host.core.is_current_load(ticket) {
            return;
        }
        host.measure_if_needed();
        let report = match plan.with_untracked(|p| host.bind(&p.units)) {
            Ok(report) => report,
            Err(e) => {
                log::warn!("plan binding failed: {e}");
                return;
            }
        };
        if refit(host).is_some() {
            host.apply_placement();
        }
        publish_view(host, ui);
        let warning = report.warning();
        ui.update(|u| {
            u.svg_status = SvgStatus::Ready;
            u.bind_warning = warning;
        });
        host.core.bindings().iter().map(|(id, _)| id.clone()).collect()
    };
    // Repaint is driven by the plan-state effect.
    plan.update(|p| p.bound = bound);
}

#[cfg(feature = "csr")]
fn event_sink(shared: Weak<RefCell<Option<FloorPlan>>>, plan: RwSignal<PlanState>, ui: RwSignal<UiState>) -> EventSink {
    Rc::new(move |event: HostEvent| match event {
        HostEvent::Toggle(unit_id) => {
            let accepted = shared.upgrade().is_some_and(|shared| {
                plan.with_untracked(|p| {
                    shared
                        .borrow()
                        .as_ref()
                        .is_some_and(|host| host.core.accepts_click(&unit_id, &p.units, &p.selection))
                })
            });
            if !accepted {
                log::debug!("ignored click on unit {unit_id}");
                return;
            }
            plan.update(|p| {
                p.toggle(&unit_id);
            });
        }
        HostEvent::Hover { unit_id, pointer } => {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let tooltip = plan.with_untracked(|p| {
                shared
                    .borrow_mut()
                    .as_mut()
                    .and_then(|host| host.core.hover(&unit_id, pointer, &p.units).cloned())
            });
            ui.update(|u| u.tooltip = tooltip);
        }
        HostEvent::Leave => {
            if let Some(shared) = shared.upgrade() {
                if let Some(host) = shared.borrow_mut().as_mut() {
                    host.core.leave();
                }
            }
            ui.update(|u| u.tooltip = None);
        }
    })
}

/// Floor-plan host component.
///
/// On mount, this creates the `FloorPlan` over its container, observes the
/// container size, and drives load/bind/paint from `PlanState`.
#[component]
pub fn FloorPlanHost() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(not(feature = "csr"))]
    let _ = plan;

    #[cfg(feature = "csr")]
    let shared: SharedPlan = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let mounted = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let sink = event_sink(Rc::downgrade(&shared), plan, ui);

    // PHASE: MOUNT
    // Create the controller over the container and refit whenever it resizes.
    #[cfg(feature = "csr")]
    {
        let shared = Rc::clone(&shared);
        let observer = StoredValue::new_local(None::<(web_sys::ResizeObserver, Closure<dyn FnMut()>)>);
        Effect::new(move || {
            let Some(div) = container_ref.get() else {
                return;
            };
            if shared.borrow().is_some() {
                return;
            }
            let element: web_sys::HtmlElement = div.clone().into();
            *shared.borrow_mut() = Some(FloorPlan::new(element));

            let shared_for_resize = Rc::clone(&shared);
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                if let Some(host) = shared_for_resize.borrow_mut().as_mut() {
                    if refit(host).is_some() {
                        host.apply_placement();
                        publish_view(host, ui);
                    }
                }
            });
            match web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
                Ok(resize_observer) => {
                    resize_observer.observe(&div);
                    observer.set_value(Some((resize_observer, on_resize)));
                }
                Err(e) => log::warn!("ResizeObserver unavailable: {e:?}"),
            }
            mounted.set(true);
        });
        on_cleanup(move || {
            observer.try_update_value(|slot| {
                if let Some((resize_observer, _callback)) = slot.take() {
                    resize_observer.disconnect();
                }
            });
        });
    }

    // PHASE: LOAD
    // A new image URL or a reload request starts a fresh load; older fetches are discarded on arrival.
    #[cfg(feature = "csr")]
    {
        let shared = Rc::clone(&shared);
        let image_key = Memo::new(move |_| plan.with(|p| p.image_url.clone().map(|url| (url, p.request_seq))));
        Effect::new(move || {
            if !mounted.get() {
                return;
            }
            let Some((url, _seq)) = image_key.get() else {
                return;
            };
            let Some(ticket) = shared.borrow_mut().as_mut().map(FloorPlan::begin_load) else {
                return;
            };
            ui.update(UiState::reset_for_load);
            let shared = Rc::clone(&shared);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_svg(&url).await;
                on_svg_loaded(&shared, plan, ui, ticket, result);
            });
        });
    }

    // PHASE: REPAINT
    // Any change to units, selection, filters, or bindings repaints from current state.
    #[cfg(feature = "csr")]
    {
        let shared = Rc::clone(&shared);
        let sink = Rc::clone(&sink);
        Effect::new(move || {
            plan.track();
            schedule_paint(&shared, plan, &sink);
        });
    }

    // PHASE: MANUAL ZOOM
    #[cfg(feature = "csr")]
    {
        let shared = Rc::clone(&shared);
        let zoom_request = Memo::new(move |_| ui.with(|u| u.zoom_request));
        Effect::new(move || {
            let Some((_seq, command)) = zoom_request.get() else {
                return;
            };
            let mut guard = shared.borrow_mut();
            let Some(host) = guard.as_mut() else {
                return;
            };
            let placement = match command {
                ZoomCommand::In => host.core.zoom_in(),
                ZoomCommand::Out => host.core.zoom_out(),
                ZoomCommand::Reset => host.core.reset_zoom(),
            };
            if placement.is_some() {
                host.apply_placement();
            }
            publish_view(host, ui);
        });
    }

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let shared = Rc::clone(&shared);
            move |ev: leptos::ev::WheelEvent| {
                let modifiers = Modifiers { ctrl: ev.ctrl_key(), meta: ev.meta_key() };
                let mut guard = shared.borrow_mut();
                let Some(host) = guard.as_mut() else {
                    return;
                };
                if host.core.on_wheel(ev.delta_y(), modifiers).is_some() {
                    ev.prevent_default();
                    host.apply_placement();
                    publish_view(host, ui);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let tooltip = move || {
        ui.get().tooltip.map(|tooltip| {
            let style = tooltip_style(tooltip.position);
            view! {
                <div class="floor-plan__tooltip" style=style role="tooltip">
                    {tooltip
                        .lines
                        .into_iter()
                        .map(|line| view! { <div class="floor-plan__tooltip-line">{line}</div> })
                        .collect_view()}
                </div>
            }
        })
    };

    let loading = move || matches!(ui.get().svg_status, SvgStatus::Loading);

    view! {
        <div class="floor-plan" class:floor-plan--rotated=move || ui.get().rotated>
            <div class="floor-plan__viewport" node_ref=container_ref on:wheel=on_wheel></div>
            <Show when=loading>
                <div class="floor-plan__loading">"Loading floor plan…"</div>
            </Show>
            {tooltip}
        </div>
    }
}
