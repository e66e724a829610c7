//! Dimension and price filters for the plan.

use leptos::prelude::*;

use floorplan::controller::format_price;
use floorplan::dimensions::format_area;

use crate::state::plan::PlanState;
use crate::util::format::{bucket_value, parse_bucket, parse_price_input};

/// Filter bar above the floor plan.
///
/// Buckets are derived from the loaded units, so only sizes that exist on this
/// plan are offered.
#[component]
pub fn FilterBar() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let price_text = RwSignal::new(String::new());

    let buckets = move || plan.with(PlanState::dimension_buckets);
    let selected_bucket = move || plan.with(|p| p.selection.filters.dimension.map(bucket_value).unwrap_or_default());
    let price_hint = move || {
        plan.with(PlanState::price_bounds)
            .map(|(lo, hi)| format!("{} – {}", format_price(lo), format_price(hi)))
            .unwrap_or_default()
    };
    let filters_active = move || plan.with(|p| p.selection.filters.is_active());

    let on_bucket = move |ev: leptos::ev::Event| {
        let value = parse_bucket(&event_target_value(&ev));
        plan.update(|p| p.set_dimension_filter(value));
    };

    let on_price = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let value = parse_price_input(&text);
        price_text.set(text);
        plan.update(|p| p.set_max_price_filter(value));
    };

    let on_clear = move |_| {
        price_text.set(String::new());
        plan.update(PlanState::clear_filters);
    };

    view! {
        <div class="filter-bar">
            <label class="filter-bar__field">
                <span>"Size"</span>
                <select class="filter-bar__select" on:change=on_bucket prop:value=selected_bucket>
                    <option value="">"Any size"</option>
                    {move || {
                        buckets()
                            .into_iter()
                            .map(|area| view! { <option value=bucket_value(area)>{format_area(area)}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <label class="filter-bar__field">
                <span>"Max €/month"</span>
                <input
                    class="filter-bar__input"
                    type="text"
                    inputmode="decimal"
                    placeholder=price_hint
                    prop:value=move || price_text.get()
                    on:input=on_price
                />
            </label>
            <button class="btn filter-bar__clear" on:click=on_clear disabled=move || !filters_active()>
                "Clear filters"
            </button>
        </div>
    }
}
