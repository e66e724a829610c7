//! Selected units, their monthly total, and the entry point to reservation.

use leptos::prelude::*;

use floorplan::controller::format_price;

use crate::state::plan::PlanState;
use crate::state::reservation::ReservationState;
use crate::util::format::selection_count_label;

#[component]
pub fn SelectionPanel() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let reservation = expect_context::<RwSignal<ReservationState>>();

    let selected = move || plan.with(PlanState::selected_units);
    let count = move || plan.with(|p| p.selection.len());
    let total = move || format_price(plan.with(PlanState::total_price));

    let on_clear = move |_| plan.update(|p| p.selection.clear());
    let on_reserve = move |_| reservation.update(ReservationState::open);

    view! {
        <aside class="selection-panel">
            <header class="selection-panel__header">
                <span>{move || selection_count_label(count())}</span>
                <button class="btn btn--link" on:click=on_clear disabled=move || count() == 0>
                    "Clear"
                </button>
            </header>
            <ul class="selection-panel__list">
                {move || {
                    selected()
                        .into_iter()
                        .map(|unit| {
                            let id = unit.id.clone();
                            view! {
                                <li class="selection-panel__item">
                                    <span class="selection-panel__number">{format!("#{}", unit.number)}</span>
                                    <span class="selection-panel__size">{unit.dimensions_label.clone()}</span>
                                    <span class="selection-panel__price">{format_price(unit.price)}</span>
                                    <button
                                        class="btn btn--icon"
                                        title="Remove"
                                        on:click=move |_| plan.update(|p| {
                                            p.toggle(&id);
                                        })
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <footer class="selection-panel__footer">
                <span class="selection-panel__total">"Total: " {total}</span>
                <button
                    class="btn btn--primary"
                    on:click=on_reserve
                    disabled=move || count() == 0 || reservation.with(ReservationState::is_open)
                >
                    "Reserve"
                </button>
            </footer>
        </aside>
    }
}
