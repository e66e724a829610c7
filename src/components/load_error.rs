//! Blocking load failure with a retry affordance.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Error panel. Retrying bumps `UiState::reload_seq`, which the page watches.
#[component]
pub fn LoadErrorPanel(#[prop(into)] message: Signal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="load-error" role="alert">
            <p class="load-error__message">{move || message.get()}</p>
            <button class="btn load-error__retry" on:click=move |_| ui.update(UiState::request_reload)>
                "Retry"
            </button>
        </div>
    }
}
