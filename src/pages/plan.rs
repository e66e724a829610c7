//! Plan page: the floor plan for one storage site and everything around it.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::bind_banner::BindBanner;
use crate::components::filter_bar::FilterBar;
use crate::components::floor_plan_host::FloorPlanHost;
use crate::components::load_error::LoadErrorPanel;
use crate::components::reservation_form::ReservationForm;
use crate::components::selection_panel::SelectionPanel;
use crate::components::unit_list::UnitList;
use crate::components::zoom_controls::ZoomControls;
use crate::state::plan::PlanState;
use crate::state::reservation::ReservationState;
use crate::state::ui::UiState;

/// Plan page. Reads the tenant from the route and (re)loads its plan whenever
/// the tenant changes or the user asks for a retry.
#[component]
pub fn PlanPage() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let reservation = expect_context::<RwSignal<ReservationState>>();
    let params = use_params_map();

    let tenant = move || params.read().get("tenant");
    let reload_seq = Memo::new(move |_| ui.with(|u| u.reload_seq));

    Effect::new(move || {
        let Some(tenant) = tenant() else {
            return;
        };
        reload_seq.track();

        let seq = plan.try_update(|p| p.begin_load(&tenant)).unwrap_or_default();
        reservation.update(ReservationState::close);
        leptos::logging::log!("loading plan for {tenant} (request {seq})");

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_plan(&tenant).await.map_err(|e| e.to_string());
            if let Err(message) = &result {
                log::warn!("plan load for {tenant} failed: {message}");
            }
            plan.update(|p| {
                if !p.finish_load(seq, result) {
                    log::debug!("dropped superseded plan response {seq}");
                }
            });
        });
    });

    let error = Memo::new(move |_| {
        plan.with(|p| p.error().map(str::to_owned)).or_else(|| ui.with(|u| u.svg_error().map(str::to_owned)))
    });
    let loading = move || plan.with(PlanState::is_loading);
    let has_units = move || plan.with(|p| !p.units.is_empty());

    view! {
        <div class="plan-page">
            <div class="plan-page__toolbar">
                <FilterBar/>
                <ZoomControls/>
            </div>
            <div class="plan-page__main">
                <BindBanner/>
                <Show when=move || error.with(Option::is_some)>
                    <LoadErrorPanel message=Signal::derive(move || error.get().unwrap_or_default())/>
                </Show>
                <Show when=loading>
                    <p class="plan-page__loading">"Loading site…"</p>
                </Show>
                <FloorPlanHost/>
                <Show when=has_units>
                    <UnitList/>
                </Show>
            </div>
            <div class="plan-page__sidebar">
                <SelectionPanel/>
            </div>
            <ReservationForm/>
        </div>
    }
}
