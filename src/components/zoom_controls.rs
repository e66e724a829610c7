//! Manual zoom buttons. The host applies each request on top of auto-fit.

use leptos::prelude::*;

use crate::state::ui::{UiState, ZoomCommand};

#[component]
pub fn ZoomControls() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let request = move |command: ZoomCommand| ui.update(|u| u.request_zoom(command));

    view! {
        <div class="zoom-controls" role="group" aria-label="Zoom">
            <button
                class="btn zoom-controls__button"
                title="Zoom out"
                disabled=move || !ui.get().can_zoom_out
                on:click=move |_| request(ZoomCommand::Out)
            >
                "−"
            </button>
            <button class="btn zoom-controls__label" title="Fit to screen" on:click=move |_| request(ZoomCommand::Reset)>
                {move || ui.get().zoom_label()}
            </button>
            <button
                class="btn zoom-controls__button"
                title="Zoom in"
                disabled=move || !ui.get().can_zoom_in
                on:click=move |_| request(ZoomCommand::In)
            >
                "+"
            </button>
        </div>
    }
}
