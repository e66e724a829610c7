//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment,
    components::{Route, Router, Routes},
};

use crate::pages::plan::PlanPage;
use crate::state::{plan::PlanState, reservation::ReservationState, ui::UiState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let plan = RwSignal::new(PlanState::default());
    let ui = RwSignal::new(UiState::default());
    let reservation = RwSignal::new(ReservationState::default());

    provide_context(plan);
    provide_context(ui);
    provide_context(reservation);

    view! {
        <Title text="Trasteros"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Select a storage site to see its floor plan."</p> }>
                <Route path=ParamSegment("tenant") view=PlanPage/>
            </Routes>
        </Router>
    }
}
