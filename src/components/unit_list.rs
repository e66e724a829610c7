//! Fallback list for units that have no shape on the plan.
//!
//! Keeps those units reachable: available ones can still be toggled here,
//! under the same filter and status rules as the plan.

use leptos::prelude::*;

use floorplan::controller::format_price;
use floorplan::visual_state::{UnitFill, fill, is_interactive};

use crate::state::plan::PlanState;
use crate::state::ui::{SvgStatus, UiState};

#[component]
pub fn UnitList() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Until binding finishes every unit looks unbound, so wait for the plan.
    let rows = move || {
        if !matches!(ui.get().svg_status, SvgStatus::Ready | SvgStatus::Failed(_)) {
            return Vec::new();
        }
        plan.with(|p| {
            let selected = p.selection.selected_ids();
            p.unbound_units()
                .into_iter()
                .map(|unit| {
                    let state = fill(unit, &p.selection.filters, selected);
                    let enabled = is_interactive(unit, &p.selection.filters, selected);
                    (unit.clone(), state, enabled)
                })
                .collect::<Vec<_>>()
        })
    };

    move || {
        let rows = rows();
        (!rows.is_empty()).then(|| {
            view! {
                <section class="unit-list">
                    <h3 class="unit-list__title">"Units not shown on the plan"</h3>
                    <ul>
                        {rows
                            .into_iter()
                            .map(|(unit, state, enabled)| {
                                let id = unit.id.clone();
                                view! {
                                    <li class=format!("unit-list__item {}", state.class_name())>
                                        <button
                                            class="unit-list__toggle"
                                            disabled=!enabled
                                            aria-pressed=(state == UnitFill::Selected).to_string()
                                            on:click=move |_| plan.update(|p| {
                                                p.toggle(&id);
                                            })
                                        >
                                            <span>{format!("#{}", unit.number)}</span>
                                            <span>{unit.dimensions_label.clone()}</span>
                                            <span>{format_price(unit.price)}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            }
        })
    }
}
