//! Inline diagnostic shown when units could not be placed on the plan.

use leptos::prelude::*;

use floorplan::controller::BindWarning;

use crate::state::ui::UiState;

#[component]
pub fn BindBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().bind_warning.map(|warning| {
            let severe = matches!(warning, BindWarning::NoneMatched { .. });
            view! {
                <div class="bind-banner" class:bind-banner--severe=severe role="status">
                    {warning.message()}
                </div>
            }
        })
    }
}
